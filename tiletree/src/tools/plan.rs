use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tiletree::{config::Config, plan::RenderPlan};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// YAML configuration of the rendering run
	#[arg(required = true)]
	config: PathBuf,

	/// number of render workers, overrides the config file
	#[arg(long, short, value_name = "INT")]
	workers: Option<usize>,

	/// depth of the tile tree, overrides the config file
	#[arg(long, short, value_name = "INT")]
	depth: Option<u8>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	log::info!("plan {:?}", arguments.config);

	let mut config = Config::from_path(&arguments.config)?;
	config.override_optional_workers(&arguments.workers);
	config.override_optional_depth(&arguments.depth);

	let plan = RenderPlan::from_config(&config)?;
	print!("{plan}");

	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn plan_testdata() {
		run_command(vec!["tiletree", "plan", "-q", "../testdata/render.yml"]).unwrap();
	}

	#[test]
	fn plan_with_overrides() {
		run_command(vec!["tiletree", "plan", "-q", "-w", "3", "-d", "5", "../testdata/render.yml"]).unwrap();
	}

	#[test]
	fn plan_zero_workers() {
		let err = run_command(vec!["tiletree", "plan", "-q", "-w", "0", "../testdata/render.yml"]).unwrap_err();
		assert_eq!(err.to_string(), "worker count must be > 0");
	}
}
