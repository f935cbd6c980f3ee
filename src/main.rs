use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use itertools::Itertools;
use joinery::JoinableIterator;
use lazy_format::lazy_format;
use log::info;
use naishin::{
    advice::{advice, faq, grade_point_value, pitfalls},
    config::Config,
    prefecture::{self, PrefectureRule, Region},
    score::{composite, max_score_of},
    subject::{GradesRecord, SubjectGroup},
};

#[derive(Parser)]
struct Opts {
    /// TOML file with default settings.
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Computes the composite score from nine grades.
    Score {
        /// Japanese, math, English, science, social, music, art, PE, tech.
        grades: GradesRecord,
        /// Code (`osaka`) or name (`大阪`); defaults to the configured one.
        #[arg(long, short)]
        prefecture: Option<String>,
        #[arg(long)]
        ten_point: bool,
    },
    /// Lists registered prefectures.
    List {
        #[arg(long)]
        region: Option<Region>,
    },
    /// Shows the rule, pitfalls and FAQ of a prefecture.
    Show { prefecture: String },
    /// Prints the effective configuration.
    Config,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let opts = Opts::parse();
    let config = Config::load(opts.config.as_deref())?;
    info!("Default prefecture: {}", config.default_prefecture());

    match opts.command {
        Command::Score {
            grades,
            prefecture,
            ten_point,
        } => {
            let query = prefecture.as_deref().unwrap_or(config.default_prefecture());
            let rule = find(query)?;
            let ten = ten_point || config.use_ten_point_scale();
            let result = composite(&grades, rule.code(), ten);
            println!("{} ({})", rule.name(), rule.code());
            println!(
                "{}",
                grades
                    .iter()
                    .map(|(subject, grade)| lazy_format!("{}:{grade}", subject.name_ja()))
                    .join_with(" ")
            );
            println!(
                "{} / {} ({}%) rank {} {}",
                result.total(),
                result.max(),
                result.percent(),
                result.rank(),
                result.rank().title()
            );
            println!("{}", advice(rule, &result));
        }
        Command::List { region } => {
            let rules = match region {
                Some(region) => prefecture::list_by_region(region).collect_vec(),
                None => prefecture::list_all().collect_vec(),
            };
            for rule in rules {
                println!(
                    "{:<10} {}\t{:>4}点  {}",
                    rule.code(),
                    rule.name(),
                    rule.max_composite_score(),
                    rule.year_weights().describe()
                );
            }
        }
        Command::Show { prefecture } => {
            let rule = find(&prefecture)?;
            show(rule);
        }
        Command::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }
    Ok(())
}

fn find(query: &str) -> anyhow::Result<&'static PrefectureRule> {
    prefecture::search(query).with_context(|| format!("Unknown prefecture: {query:?}"))
}

fn show(rule: &PrefectureRule) {
    println!(
        "{} ({}, {})",
        rule.name(),
        rule.code(),
        rule.region().name_ja()
    );
    println!("{}", rule.description());
    println!("満点: {}点", rule.max_composite_score());
    if rule.supports_ten_point_scale() {
        println!("10段階の満点: {}点", max_score_of(rule, true));
    }
    for group in [SubjectGroup::Core, SubjectGroup::Practical] {
        println!(
            "{}: ×{} (評定1あたり{}点)",
            group.name_ja(),
            rule.multiplier(group),
            grade_point_value(rule, group)
        );
    }
    println!("逆算方式: {}", rule.reverse_calc());
    println!("出典: {} ({}確認)", rule.source_url(), rule.last_verified());
    println!();
    for pitfall in pitfalls(rule) {
        println!("- {pitfall}");
    }
    println!();
    for entry in faq(rule) {
        println!("Q. {}", entry.question());
        println!("A. {}", entry.answer());
    }
}
