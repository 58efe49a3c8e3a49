/*!
# Argtree: Cargo-ish Demo

This example builds a small cargo-like tree and matches it against whatever
arguments are passed, e.g.:

cargo run --example cargo -- new --name foo --type=lib
cargo run --example cargo -- config env --vcs git
RUST_LOG=argtree=trace cargo run --example cargo -- -h
*/

use argtree::{
	Arg,
	ArgtreeError,
	CommandTree,
	Subcommand,
};
use tracing_subscriber::{
	EnvFilter,
	fmt,
};



fn main() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

	let res = tree().and_then(|tree| {
		let mut tokens = argtree::args();
		tree.parse_tokens(&mut tokens)?;
		if ! tokens.is_empty() {
			tracing::warn!(leftover = ?tokens.as_slice(), "unclaimed arguments");
		}
		Ok(())
	});

	if let Err(e) = res {
		eprintln!("\x1b[1;91mError:\x1b[0m {e}");
		std::process::exit(e.exit_code());
	}
}

/// # Build the Tree.
fn tree() -> Result<CommandTree, ArgtreeError> {
	let new = Subcommand::new("new")
		.with_arg(Arg::mandatory("name").with_short('n'))?
		.with_arg(Arg::one_of("type", ["bin", "lib"]))?
		.with_action(|p| {
			println!("new project: {}, {}", &p["name"], &p["type"]);
			Ok(())
		});

	let build = Subcommand::new("build")
		.with_arg(Arg::one_of("type", ["debug", "release"]))?
		.with_action(|p| {
			println!("building: {}", &p["type"]);
			Ok(())
		});

	let config = Subcommand::new("config")
		.with_arg(
			Subcommand::new("user")
				.with_arg(Arg::mandatory("name"))?
				.with_action(|p| {
					println!("new user name is {}", &p["name"]);
					Ok(())
				})
		)?
		.with_arg(
			Subcommand::new("env")
				.with_arg(Arg::one_of("vcs", ["git", "subversion", "other"]))?
				.with_action(|p| {
					println!("new vcs is {}", &p["vcs"]);
					Ok(())
				})
		)?;

	Ok(CommandTree::new()
		.with_args([Arg::from(new), Arg::from(build), Arg::from(config)])?
		.with_arg(Arg::flag("help").with_short('h'))?
		.with_action(|p| {
			if p.flag("help") {
				println!("Usage: cargo [new|build|config] [OPTIONS]");
			}
			Ok(())
		}))
}
