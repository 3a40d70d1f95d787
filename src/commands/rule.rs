//! Handler for the `rules` command.

use colored::*;
use mdsimplify_lib::config::Config;
use mdsimplify_lib::pipeline::Pipeline;

/// Print every rule in the order the pipeline applies it
pub fn handle_rules(config: &Config) {
    let pipeline = Pipeline::new(config);

    println!("{}", "Rules, in application order:".bold());
    for (position, rule) in pipeline.rules().iter().enumerate() {
        println!(
            "{:>3}. {} {:<11} {}",
            position + 1,
            rule.name().cyan(),
            format!("[{}]", rule.category().as_str()).dimmed(),
            rule.description()
        );
    }
}
