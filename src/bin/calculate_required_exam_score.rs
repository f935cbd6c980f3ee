use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use inquire::{CustomType, InquireError, Text};
use naishin::{
    config::Config,
    prefecture,
    reverse::{
        internal_score_max_of, required_exam_score, KFactor, OsakaType, ReverseProfile,
        ReverseQuery,
    },
};

macro_rules! check {
    ($e: expr) => {{
        let e = $e;
        if let Err(InquireError::OperationInterrupted) = e {
            return Ok(());
        }
        e
    }};
}

#[derive(Parser)]
struct Opts {
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = Opts::parse();
    let config = Config::load(opts.config.as_deref())?;

    let query = check!(Text::new("Prefecture")
        .with_default(config.default_prefecture())
        .prompt())?;
    let rule = prefecture::search(&query).ok_or_else(|| anyhow!("Unknown prefecture: {query:?}"))?;
    println!("{} ({})", rule.name(), rule.year_weights().describe());

    let profile = match ReverseProfile::from(rule.reverse_calc()) {
        ReverseProfile::OsakaTyped { .. } => ReverseProfile::OsakaTyped {
            osaka_type: check!(CustomType::<OsakaType>::new("Selection type (I-V)")
                .with_default(OsakaType::default())
                .prompt())?,
        },
        ReverseProfile::ChibaKFactor { .. } => ReverseProfile::ChibaKFactor {
            k: KFactor::from(check!(CustomType::<f64>::new("K factor (0.5-2.0)")
                .with_default(KFactor::default().get())
                .prompt())?),
        },
        profile => profile,
    };

    let internal_max = internal_score_max_of(rule, profile, config.use_ten_point_scale());
    let internal_max = check!(CustomType::<f64>::new("Internal score maximum")
        .with_default(internal_max)
        .prompt())?;
    let message = format!("Current internal score (of {internal_max})");
    let current = check!(CustomType::<f64>::new(&message).prompt())?;
    let ratio = check!(CustomType::<f64>::new("Internal score ratio (%)")
        .with_default(config.internal_ratio_percent())
        .prompt())?;
    let exam_max = check!(CustomType::<f64>::new("Exam maximum")
        .with_default(config.exam_max_score())
        .prompt())?;
    let target = check!(CustomType::<f64>::new("Target composite score").prompt())?;

    let result = required_exam_score(
        &ReverseQuery::builder()
            .prefecture_code(rule.code())
            .target_composite(target)
            .current_internal_score(current)
            .internal_score_max(internal_max)
            .internal_ratio_percent(ratio)
            .exam_max_score(exam_max)
            .profile(profile)
            .build(),
    )?;

    println!(
        "{} / {} ({}%), {} per subject",
        result.required_exam_score(),
        result.exam_max_score(),
        result.exam_score_percent(),
        result.per_subject_average()
    );
    println!("{}", result.explanation());
    Ok(())
}
