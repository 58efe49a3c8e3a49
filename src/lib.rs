/*!
# Argtree

This crate provides a small, declarative CLI argument matcher. Describe the
arguments and (nested) subcommands your program expects as a tree, bind
actions to the bits you care about, and [`CommandTree::parse`] will take care
of the rest: tokenizing, matching, validating, collecting the values into a
flat [`Params`] mapping, and calling the relevant action(s).

It sits somewhere between hand-rolled matching and full-service crates like
[clap](https://crates.io/crates/clap). There is no help generation, no typed
coercion, no defaults, and no repeated arguments; everything is a string.



## Arguments

There are four kinds of [`Arg`]:

| Kind | Syntax | Result |
| ---- | ------ | ------ |
| [`Arg::mandatory`] | `--name val` / `--name=val` / `-n val` | `val` |
| [`Arg::one_of`] | same, but `val` must be a candidate | `val` |
| [`Arg::flag`] | `--name` / `-n` | `"true"` or `"false"` |
| [`Subcommand`] | `name` | (its children) |

Marker-style arguments are located anywhere in the remaining tokens, so
their order doesn't matter. Subcommands are positional: their name has to be
the very next token. Once a subcommand matches, its siblings are skipped.

Actions run innermost-first after their subtree is fully matched, which means
a matched subcommand's action _and_ the root action will both fire.



## Example

```
use argtree::{Arg, CommandTree, Subcommand};

let tree = CommandTree::new()
    .with_arg(
        Subcommand::new("build")
            .with_arg(Arg::one_of("type", ["debug", "release"])).unwrap()
            .with_action(|p| {
                println!("building: {}", &p["type"]);
                Ok(())
            })
    ).unwrap()
    .with_arg(
        Subcommand::new("new")
            .with_arg(Arg::mandatory("name")).unwrap()
    ).unwrap()
    .with_arg(Arg::flag("help").with_short('h')).unwrap()
    .with_action(|p| {
        if p.flag("help") { println!("Usage: ..."); }
        Ok(())
    });

// Normally you'd pass argtree::args() to CommandTree::parse_tokens.
tree.parse(["build", "--type=release"]).unwrap();
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod arg;
mod command;
mod error;
mod params;
mod token;

pub use arg::{
	Arg,
	Marker,
};
pub use command::{
	Action,
	CommandTree,
	Subcommand,
};
pub use error::{
	ActionError,
	ArgtreeError,
};
pub use params::Params;
pub use token::{
	args,
	tokenize,
	Tokens,
};
