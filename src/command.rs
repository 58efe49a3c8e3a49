/*!
# Argtree: Commands

This module holds the tree itself — [`CommandTree`] at the root and any
number of nested [`Subcommand`]s beneath it — along with the walk that
matches it against a [`Tokens`] buffer.
*/

use crate::{
	ActionError,
	Arg,
	ArgtreeError,
	Params,
	Tokens,
};
use std::fmt;



/// # Action.
///
/// A callback bound to a [`Subcommand`] or [`CommandTree`], run after all of
/// its children have been matched.
pub type Action = Box<dyn Fn(&Params) -> Result<(), ActionError>>;



/// # Subcommand.
///
/// A named node owning its own child descriptors and, optionally, an action.
///
/// A subcommand only matches when its name is the very next token; once it
/// does, its children are walked in declaration order, then its action (if
/// any) is called with the parameters collected so far.
///
/// ## Examples
///
/// ```
/// use argtree::{Arg, Subcommand};
///
/// let build = Subcommand::new("build")
///     .with_arg(Arg::one_of("type", ["debug", "release"])).unwrap()
///     .with_action(|p| {
///         println!("building: {}", &p["type"]);
///         Ok(())
///     });
/// ```
pub struct Subcommand {
	/// # Name.
	name: &'static str,

	/// # Short Alias.
	///
	/// Never matched; only kept so construction can reject it.
	pub(crate) short: Option<char>,

	/// # Children.
	children: Vec<Arg>,

	/// # Action.
	action: Option<Action>,
}

impl fmt::Debug for Subcommand {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subcommand")
			.field("name", &self.name)
			.field("children", &self.children)
			.field("action", &self.action.is_some())
			.finish()
	}
}

impl Subcommand {
	#[must_use]
	/// # New.
	pub const fn new(name: &'static str) -> Self {
		Self {
			name,
			short: None,
			children: Vec::new(),
			action: None,
		}
	}

	/// # With Argument.
	///
	/// Append a child descriptor.
	///
	/// ## Errors
	///
	/// This will return an error if the child's name or short alias is
	/// invalid or already taken by a sibling, or if it is a one-of with no
	/// candidates.
	pub fn with_arg<A: Into<Arg>>(mut self, arg: A) -> Result<Self, ArgtreeError> {
		push_child(&mut self.children, arg.into())?;
		Ok(self)
	}

	/// # With Arguments.
	///
	/// Append several child descriptors.
	///
	/// ## Errors
	///
	/// This will return an error if any of the children would fail
	/// [`Subcommand::with_arg`].
	pub fn with_args<I: IntoIterator<Item=Arg>>(self, args: I)
	-> Result<Self, ArgtreeError> {
		args.into_iter().try_fold(self, Self::with_arg)
	}

	#[must_use]
	/// # With Action.
	///
	/// Bind (or replace) the action.
	pub fn with_action<F>(mut self, action: F) -> Self
	where F: Fn(&Params) -> Result<(), ActionError> + 'static {
		self.action = Some(Box::new(action));
		self
	}
}

impl Subcommand {
	#[must_use]
	/// # Name.
	pub const fn name(&self) -> &'static str { self.name }

	#[must_use]
	/// # Children.
	pub fn children(&self) -> &[Arg] { self.children.as_slice() }

	#[must_use]
	/// # Has Action?
	pub const fn has_action(&self) -> bool { self.action.is_some() }

	/// # Parse.
	///
	/// Claim the first token — which must be this subcommand's name — then
	/// walk the children and run the action.
	///
	/// ## Errors
	///
	/// Returns [`ArgtreeError::SubcommandMismatch`] if the first token isn't
	/// this subcommand's name, otherwise passes through whatever the children
	/// or action return.
	pub fn parse(&self, tokens: &mut Tokens, params: &mut Params)
	-> Result<(), ArgtreeError> {
		if tokens.peek() != Some(self.name) {
			return Err(ArgtreeError::SubcommandMismatch(self.name));
		}
		tokens.remove(0);
		tracing::debug!(name = self.name, "matched subcommand");

		walk(&self.children, tokens, params)?;
		dispatch(Some(self.name), self.action.as_ref(), params)
	}
}



#[derive(Default)]
/// # Command Tree.
///
/// This is the root of the descriptor tree. It has no name of its own, but
/// otherwise works just like a [`Subcommand`]: the top-level children are
/// walked in order, then the root action — if any — is called with the final
/// parameters.
///
/// Note that when a subcommand is matched, both its action _and_ the root's
/// will fire, innermost first. Root actions handling global flags like
/// `--help` should keep that in mind.
///
/// ## Examples
///
/// ```
/// use argtree::{Arg, CommandTree};
///
/// let tree = CommandTree::new()
///     .with_arg(Arg::mandatory("name")).unwrap()
///     .with_arg(Arg::one_of("type", ["bin", "lib"])).unwrap()
///     .with_action(|p| {
///         assert_eq!(p.get("name"), Some("foo"));
///         assert_eq!(p.get("type"), Some("lib"));
///         Ok(())
///     });
///
/// assert!(tree.parse(["--name", "foo", "--type=lib"]).is_ok());
/// assert!(tree.parse(["--type", "cli", "--name", "x"]).is_err());
/// ```
pub struct CommandTree {
	/// # Children.
	children: Vec<Arg>,

	/// # Action.
	action: Option<Action>,
}

impl fmt::Debug for CommandTree {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CommandTree")
			.field("children", &self.children)
			.field("action", &self.action.is_some())
			.finish()
	}
}

impl CommandTree {
	#[must_use]
	/// # New.
	pub const fn new() -> Self {
		Self {
			children: Vec::new(),
			action: None,
		}
	}

	/// # With Argument.
	///
	/// Append a top-level descriptor.
	///
	/// ## Errors
	///
	/// This will return an error if the child's name or short alias is
	/// invalid or already taken by a sibling, or if it is a one-of with no
	/// candidates.
	pub fn with_arg<A: Into<Arg>>(mut self, arg: A) -> Result<Self, ArgtreeError> {
		push_child(&mut self.children, arg.into())?;
		Ok(self)
	}

	/// # With Arguments.
	///
	/// Append several top-level descriptors.
	///
	/// ## Errors
	///
	/// This will return an error if any of the children would fail
	/// [`CommandTree::with_arg`].
	pub fn with_args<I: IntoIterator<Item=Arg>>(self, args: I)
	-> Result<Self, ArgtreeError> {
		args.into_iter().try_fold(self, Self::with_arg)
	}

	#[must_use]
	/// # With Action.
	///
	/// Bind (or replace) the root action.
	pub fn with_action<F>(mut self, action: F) -> Self
	where F: Fn(&Params) -> Result<(), ActionError> + 'static {
		self.action = Some(Box::new(action));
		self
	}
}

impl CommandTree {
	#[must_use]
	/// # Children.
	pub fn children(&self) -> &[Arg] { self.children.as_slice() }

	/// # Parse.
	///
	/// Tokenize the raw arguments — excluding the program path! — and match
	/// them against the tree, firing any applicable actions along the way.
	///
	/// Use [`argtree::args`](crate::args) with [`CommandTree::parse_tokens`]
	/// to parse the environment directly.
	///
	/// ## Errors
	///
	/// The first failure aborts the parse and is returned as-is. Actions
	/// fire only after their whole subtree has matched, so a matching failure
	/// never triggers any of them.
	pub fn parse<I, S>(&self, raw: I) -> Result<(), ArgtreeError>
	where I: IntoIterator<Item=S>, S: Into<String> {
		let mut tokens: Tokens = raw.into_iter().collect();
		self.parse_tokens(&mut tokens).map(|_| ())
	}

	/// # Parse Tokens.
	///
	/// Match the tree against a caller-owned token buffer, returning the final
	/// parameters once every applicable action has run. Any tokens left in
	/// the buffer afterwards were not claimed by anything.
	///
	/// ## Errors
	///
	/// Returns [`ArgtreeError::EmptyInvocation`] if the buffer is empty but a
	/// top-level descriptor requires a value; otherwise the first failure
	/// encountered during the walk.
	pub fn parse_tokens(&self, tokens: &mut Tokens) -> Result<Params, ArgtreeError> {
		if tokens.is_empty() {
			if let Some(arg) = self.children.iter().find(|a| a.is_required()) {
				return Err(ArgtreeError::EmptyInvocation(arg.name()));
			}
		}

		let mut params = Params::default();
		walk(&self.children, tokens, &mut params)?;
		dispatch(None, self.action.as_ref(), &params)?;
		Ok(params)
	}
}



/// # Push Child.
///
/// Validate and append a descriptor.
fn push_child(children: &mut Vec<Arg>, arg: Arg) -> Result<(), ArgtreeError> {
	arg.check(children)?;
	children.push(arg);
	Ok(())
}

/// # Walk Siblings.
///
/// Match one level of the tree. Marker-based descriptors are parsed
/// unconditionally; a subcommand is only entered if its name is the next
/// token, and once one has been entered, the rest of the level is skipped.
fn walk(children: &[Arg], tokens: &mut Tokens, params: &mut Params)
-> Result<(), ArgtreeError> {
	for child in children {
		if let Arg::Subcommand(sub) = child {
			if tokens.peek() == Some(sub.name()) {
				return sub.parse(tokens, params);
			}
		}
		else { child.parse(tokens, params)?; }
	}

	Ok(())
}

/// # Dispatch Action.
fn dispatch(name: Option<&'static str>, action: Option<&Action>, params: &Params)
-> Result<(), ArgtreeError> {
	if let Some(cb) = action {
		tracing::debug!(command = name.unwrap_or("<root>"), "running action");
		cb(params).map_err(|e| ArgtreeError::Action(name, e))?;
	}
	Ok(())
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::tokenize;
	use std::{
		cell::RefCell,
		rc::Rc,
	};

	/// # Call Log.
	type Log = Rc<RefCell<Vec<String>>>;

	/// # Cargo-ish Tree.
	///
	/// Every action appends a line to the returned log.
	fn cargo() -> (CommandTree, Log) {
		let log = Log::default();

		let l = Rc::clone(&log);
		let new = Subcommand::new("new")
			.with_arg(Arg::mandatory("name")).unwrap()
			.with_arg(Arg::one_of("type", ["bin", "lib"])).unwrap()
			.with_action(move |p| {
				l.borrow_mut().push(format!("new project: {}, {}", &p["name"], &p["type"]));
				Ok(())
			});

		let l = Rc::clone(&log);
		let build = Subcommand::new("build")
			.with_arg(Arg::one_of("type", ["debug", "release"])).unwrap()
			.with_action(move |p| {
				l.borrow_mut().push(format!("building: {}", &p["type"]));
				Ok(())
			});

		let l = Rc::clone(&log);
		let user = Subcommand::new("user")
			.with_arg(Arg::mandatory("name")).unwrap()
			.with_action(move |p| {
				l.borrow_mut().push(format!("new user name is {}", &p["name"]));
				Ok(())
			});

		let l = Rc::clone(&log);
		let env = Subcommand::new("env")
			.with_arg(Arg::one_of("vcs", ["git", "subversion", "other"])).unwrap()
			.with_action(move |p| {
				l.borrow_mut().push(format!("new vcs is {}", &p["vcs"]));
				Ok(())
			});

		let config = Subcommand::new("config")
			.with_arg(user).unwrap()
			.with_arg(env).unwrap();

		let l = Rc::clone(&log);
		let tree = CommandTree::new()
			.with_arg(new).unwrap()
			.with_arg(build).unwrap()
			.with_arg(config).unwrap()
			.with_arg(Arg::flag("help").with_short('h')).unwrap()
			.with_action(move |p| {
				l.borrow_mut().push(format!("root: help={}", &p["help"]));
				Ok(())
			});

		(tree, log)
	}

	#[test]
	fn t_root_only() {
		let tree = CommandTree::new()
			.with_args([Arg::mandatory("name"), Arg::one_of("type", ["bin", "lib"])])
			.unwrap();

		let mut tokens = tokenize(["--name", "foo", "--type", "lib"]);
		let params = tree.parse_tokens(&mut tokens).expect("Parse failed.");
		assert_eq!(params.to_string(), "name=foo, type=lib");
		assert!(tokens.is_empty(), "Everything should have been consumed.");

		// Order doesn't matter.
		let mut tokens = tokenize(["--type", "lib", "--name", "foo"]);
		assert_eq!(tree.parse_tokens(&mut tokens).ok(), Some(params.clone()));

		// Nor does the assignment style.
		let mut tokens = tokenize(["--type=lib", "--name=foo"]);
		assert_eq!(tree.parse_tokens(&mut tokens).ok(), Some(params));

		match tree.parse(["--type", "cli", "--name", "x"]) {
			Err(ArgtreeError::InvalidChoice("type", v)) => assert_eq!(v, "cli"),
			e => panic!("Expected InvalidChoice, got {e:?}."),
		}
	}

	#[test]
	fn t_root_action() {
		let out = Rc::new(RefCell::new(String::new()));
		let o = Rc::clone(&out);
		let tree = CommandTree::new()
			.with_args([Arg::mandatory("name"), Arg::one_of("type", ["bin", "lib"])])
			.unwrap()
			.with_action(move |p| {
				*o.borrow_mut() = format!("{}, {}", &p["name"], &p["type"]);
				Ok(())
			});

		assert!(tree.parse(["--name", "foo", "--type", "lib"]).is_ok());
		assert_eq!(out.borrow().as_str(), "foo, lib");

		// Failures never reach the action.
		out.borrow_mut().clear();
		assert!(tree.parse(["--type", "cli", "--name", "x"]).is_err());
		assert!(out.borrow().is_empty());
	}

	#[test]
	fn t_subcommand() {
		let (tree, log) = cargo();

		let mut tokens = tokenize(["build", "--type", "release"]);
		let params = tree.parse_tokens(&mut tokens).expect("Parse failed.");
		assert!(tokens.is_empty());
		assert_eq!(
			log.borrow().as_slice(),
			["building: release", "root: help="],
			"Inner action first, then root; nothing from new.",
		);

		// Only the matched path shows up. (The root flag comes after the
		// subcommands, so it is skipped too.)
		assert_eq!(params.to_string(), "type=release");
	}

	#[test]
	fn t_nested() {
		let (tree, log) = cargo();

		let mut tokens = tokenize(["config", "env", "--vcs=git"]);
		assert!(tree.parse_tokens(&mut tokens).is_ok());
		assert!(tokens.is_empty());
		assert_eq!(log.borrow().as_slice(), ["new vcs is git", "root: help="]);

		log.borrow_mut().clear();
		assert!(tree.parse(["config", "user", "--name", "Björk"]).is_ok());
		assert_eq!(log.borrow().as_slice(), ["new user name is Björk", "root: help="]);

		// A subcommand with no nested match still counts.
		log.borrow_mut().clear();
		let mut tokens = tokenize(["config", "--extra"]);
		assert!(tree.parse_tokens(&mut tokens).is_ok());
		assert_eq!(tokens.as_slice(), ["--extra"], "Unclaimed tokens stay put.");
		assert_eq!(log.borrow().as_slice(), ["root: help="]);
	}

	#[test]
	fn t_exclusive() {
		// Once a sibling claims the token, its failure is returned as-is;
		// matching never falls back to a later sibling.
		let hits = Rc::new(RefCell::new(Vec::new()));
		let h1 = Rc::clone(&hits);
		let h2 = Rc::clone(&hits);
		let tree = CommandTree::new()
			.with_arg(Subcommand::new("run")
				.with_arg(Arg::mandatory("target")).unwrap()
				.with_action(move |_| { h1.borrow_mut().push(1); Ok(()) })
			).unwrap()
			.with_arg(Arg::from(Subcommand::new("other")
				.with_action(move |_| { h2.borrow_mut().push(2); Ok(()) })
			)).unwrap();

		assert!(matches!(
			tree.parse(["run"]),
			Err(ArgtreeError::MissingRequiredArgument("target")),
		));
		assert!(hits.borrow().is_empty());

		assert!(tree.parse(["other"]).is_ok());
		assert_eq!(hits.borrow().as_slice(), [2]);
	}

	#[test]
	fn t_value_named_like_subcommand() {
		// A value that happens to match a subcommand name is still a value.
		let tree = CommandTree::new()
			.with_arg(Arg::mandatory("name")).unwrap()
			.with_arg(Subcommand::new("build").with_arg(Arg::flag("v")).unwrap()).unwrap();

		let mut tokens = tokenize(["--name", "build", "build", "--v"]);
		let params = tree.parse_tokens(&mut tokens).expect("Parse failed.");
		assert_eq!(params.to_string(), "name=build, v=true");
		assert!(tokens.is_empty());
	}

	#[test]
	fn t_positional() {
		let (tree, log) = cargo();

		// Subcommands must lead; a later "build" is just an unclaimed token.
		let mut tokens = tokenize(["--help", "build", "--type", "debug"]);
		let params = tree.parse_tokens(&mut tokens).expect("Parse failed.");
		assert_eq!(tokens.as_slice(), ["build", "--type", "debug"]);
		assert!(params.flag("help"));
		assert_eq!(log.borrow().as_slice(), ["root: help=true"]);

		// Options may come before nested subcommand names though.
		log.borrow_mut().clear();
		let mut tokens = tokenize(["config", "--name", "x", "user"]);
		assert!(tree.parse_tokens(&mut tokens).is_ok());
		assert_eq!(tokens.as_slice(), ["--name", "x", "user"], "user isn't next, so nothing matched.");
	}

	#[test]
	fn t_help() {
		let tree = CommandTree::new()
			.with_arg(Arg::flag("help").with_short('h'))
			.unwrap();

		let mut tokens = tokenize(["-h"]);
		let params = tree.parse_tokens(&mut tokens).expect("Parse failed.");
		assert_eq!(params.get("help"), Some("true"));

		let mut tokens = Tokens::default();
		let params = tree.parse_tokens(&mut tokens).expect("Parse failed.");
		assert_eq!(params.get("help"), Some("false"));
	}

	#[test]
	fn t_empty() {
		let tree = CommandTree::new()
			.with_args([Arg::flag("help"), Arg::mandatory("name")])
			.unwrap();
		assert!(matches!(
			tree.parse(Vec::<String>::new()),
			Err(ArgtreeError::EmptyInvocation("name")),
		));

		// Not empty, just wrong.
		assert!(matches!(
			tree.parse(["--help"]),
			Err(ArgtreeError::MissingRequiredArgument("name")),
		));

		// Subcommand-only roots are fine with nothing.
		let (tree, log) = cargo();
		assert!(tree.parse(Vec::<String>::new()).is_ok());
		assert_eq!(log.borrow().as_slice(), ["root: help=false"]);
	}

	#[test]
	fn t_mismatch() {
		let sub = Subcommand::new("build");
		let mut params = Params::default();
		let mut tokens = tokenize(["new"]);
		assert!(matches!(
			sub.parse(&mut tokens, &mut params),
			Err(ArgtreeError::SubcommandMismatch("build")),
		));

		let mut tokens = Tokens::default();
		assert!(matches!(
			sub.parse(&mut tokens, &mut params),
			Err(ArgtreeError::SubcommandMismatch("build")),
		));
	}

	#[test]
	fn t_action_error() {
		let tree = CommandTree::new()
			.with_arg(Subcommand::new("fail").with_action(|_| Err("nope".into())))
			.unwrap()
			.with_action(|_| panic!("The root action shouldn't run."));

		match tree.parse(["fail"]) {
			Err(e @ ArgtreeError::Action(Some("fail"), _)) => {
				assert_eq!(e.to_string(), "Action failed: nope (fail)");
			},
			e => panic!("Expected Action, got {e:?}."),
		}
	}

	#[test]
	fn t_construction() {
		assert!(matches!(
			CommandTree::new().with_args([Arg::flag("help"), Arg::mandatory("help")]),
			Err(ArgtreeError::DuplicateName("help")),
		));
		assert!(matches!(
			Subcommand::new("x").with_args([
				Arg::flag("verbose").with_short('v'),
				Arg::flag("version").with_short('v'),
			]),
			Err(ArgtreeError::DuplicateShort("version", 'v')),
		));
		assert!(matches!(
			CommandTree::new().with_arg(Subcommand::new("-x")),
			Err(ArgtreeError::InvalidName("-x")),
		));

		let (tree, _) = cargo();
		assert_eq!(tree.children().len(), 4);
		let Arg::Subcommand(config) = &tree.children()[2] else {
			panic!("Expected config subcommand.");
		};
		assert_eq!(config.name(), "config");
		assert!(! config.has_action());
		assert_eq!(config.children().len(), 2);
	}
}
