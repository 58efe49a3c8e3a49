/*!
# Argtree: Argument Descriptors
*/

use crate::{
	ArgtreeError,
	Params,
	Subcommand,
	Tokens,
	params::{
		FALSE,
		TRUE,
	},
};



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Marker.
///
/// The name and optional short alias shared by the value-ish descriptors.
/// A marker matches `--{name}` or, if that isn't present, `-{short}`.
pub struct Marker {
	/// # Name.
	name: &'static str,

	/// # Short Alias.
	short: Option<char>,
}

impl Marker {
	#[must_use]
	/// # Name.
	pub const fn name(&self) -> &'static str { self.name }

	#[must_use]
	/// # Short Alias.
	pub const fn short(&self) -> Option<char> { self.short }

	/// # Locate and Take Value.
	///
	/// Find the marker, then remove both it and the value following it.
	fn take_value(&self, tokens: &mut Tokens) -> Result<String, ArgtreeError> {
		let idx = tokens.find_marker(self.name, self.short)
			.ok_or(ArgtreeError::MissingRequiredArgument(self.name))?;
		let value = tokens.remove_pair(idx)
			.ok_or(ArgtreeError::MissingValue(self.name))?;

		tracing::trace!(name = self.name, value = %value, "consumed option");
		Ok(value)
	}

	/// # Locate and Take Switch.
	///
	/// Remove the marker if present, returning whether or not it was.
	fn take_switch(&self, tokens: &mut Tokens) -> bool {
		if let Some(idx) = tokens.find_marker(self.name, self.short) {
			tokens.remove(idx);
			tracing::trace!(name = self.name, "consumed flag");
			true
		}
		else { false }
	}
}



#[derive(Debug)]
/// # Argument Descriptor.
///
/// This is a single node in a [`CommandTree`](crate::CommandTree).
///
/// Mandatory, one-of, and flag descriptors are located by marker anywhere in
/// the remaining tokens, so the user may pass them in whatever order they
/// like. Subcommands, on the other hand, are positional: their name must be
/// the very next token.
///
/// ## Examples
///
/// ```
/// use argtree::{Arg, Subcommand};
///
/// let name = Arg::mandatory("name");
/// let kind = Arg::one_of("type", ["bin", "lib"]);
/// let help = Arg::flag("help").with_short('h');
/// let new = Arg::from(Subcommand::new("new"));
///
/// assert_eq!(help.short(), Some('h'));
/// assert!(new.is_subcommand());
/// ```
pub enum Arg {
	/// # Mandatory.
	///
	/// Requires exactly one value, e.g. `--name foo`.
	Mandatory(Marker),

	/// # One Of.
	///
	/// Requires exactly one value from a fixed set of candidates.
	OneOf(Marker, Vec<&'static str>),

	/// # Flag.
	///
	/// Presence-only; recorded as `"true"` or `"false"`.
	Flag(Marker),

	/// # Subcommand.
	Subcommand(Subcommand),
}

impl From<Subcommand> for Arg {
	#[inline]
	fn from(src: Subcommand) -> Self { Self::Subcommand(src) }
}

impl Arg {
	#[must_use]
	/// # New Mandatory.
	pub const fn mandatory(name: &'static str) -> Self {
		Self::Mandatory(Marker { name, short: None })
	}

	#[must_use]
	/// # New One-Of.
	pub fn one_of<I>(name: &'static str, candidates: I) -> Self
	where I: IntoIterator<Item=&'static str> {
		Self::OneOf(Marker { name, short: None }, candidates.into_iter().collect())
	}

	#[must_use]
	/// # New Flag.
	pub const fn flag(name: &'static str) -> Self {
		Self::Flag(Marker { name, short: None })
	}

	#[must_use]
	/// # With Short Alias.
	///
	/// Set a single-character alias, matched as `-{short}` when the long form
	/// is absent.
	///
	/// Subcommands are matched by bare name only; an alias set on one is
	/// rejected with [`ArgtreeError::InvalidShort`] when it is added to a
	/// tree.
	pub fn with_short(mut self, short: char) -> Self {
		match &mut self {
			Self::Mandatory(m) | Self::OneOf(m, _) | Self::Flag(m) => { m.short = Some(short); },
			Self::Subcommand(s) => { s.short = Some(short); },
		}
		self
	}
}

impl Arg {
	#[must_use]
	/// # Name.
	pub const fn name(&self) -> &'static str {
		match self {
			Self::Mandatory(m) | Self::OneOf(m, _) | Self::Flag(m) => m.name,
			Self::Subcommand(s) => s.name(),
		}
	}

	#[must_use]
	/// # Short Alias.
	pub const fn short(&self) -> Option<char> {
		match self {
			Self::Mandatory(m) | Self::OneOf(m, _) | Self::Flag(m) => m.short,
			Self::Subcommand(s) => s.short,
		}
	}

	#[must_use]
	/// # Is Subcommand?
	pub const fn is_subcommand(&self) -> bool { matches!(self, Self::Subcommand(_)) }

	#[must_use]
	/// # Is Required?
	///
	/// Returns `true` for descriptors that fail when absent, i.e. mandatory
	/// and one-of.
	pub const fn is_required(&self) -> bool {
		matches!(self, Self::Mandatory(_) | Self::OneOf(_, _))
	}

	/// # Parse.
	///
	/// Match this descriptor against the remaining tokens, removing whatever
	/// it claims and recording the result in `params`.
	///
	/// ## Errors
	///
	/// * Mandatory and one-of descriptors fail if their marker is missing or has no value after it;
	/// * One-of descriptors fail if the value isn't a candidate;
	/// * Subcommands fail if the first token isn't their name, or if anything beneath them fails;
	///
	/// Flags never fail.
	pub fn parse(&self, tokens: &mut Tokens, params: &mut Params)
	-> Result<(), ArgtreeError> {
		match self {
			Self::Mandatory(m) => {
				let value = m.take_value(tokens)?;
				params.insert(m.name, value);
			},
			Self::OneOf(m, candidates) => {
				let value = m.take_value(tokens)?;
				if ! candidates.iter().any(|c| *c == value) {
					return Err(ArgtreeError::InvalidChoice(m.name, value));
				}
				params.insert(m.name, value);
			},
			Self::Flag(m) => {
				let value = if m.take_switch(tokens) { TRUE } else { FALSE };
				params.insert(m.name, value.to_owned());
			},
			Self::Subcommand(s) => s.parse(tokens, params)?,
		}

		Ok(())
	}
}

impl Arg {
	/// # Check Against Siblings.
	///
	/// Make sure this descriptor is well-formed and doesn't clash with any
	/// of the siblings it is about to join.
	pub(crate) fn check(&self, siblings: &[Self]) -> Result<(), ArgtreeError> {
		let name = self.name();
		if ! valid_name(name.as_bytes()) {
			return Err(ArgtreeError::InvalidName(name));
		}

		if let Self::OneOf(_, candidates) = self {
			if candidates.is_empty() { return Err(ArgtreeError::NoCandidates(name)); }
		}

		let short = self.short();
		if let Some(c) = short {
			if self.is_subcommand() || ! c.is_ascii_alphanumeric() {
				return Err(ArgtreeError::InvalidShort(name, c));
			}
		}

		// Subcommands and markers live in different namespaces.
		for other in siblings {
			if other.is_subcommand() != self.is_subcommand() { continue; }
			if other.name() == name { return Err(ArgtreeError::DuplicateName(name)); }
			if let Some(c) = short {
				if other.short() == Some(c) {
					return Err(ArgtreeError::DuplicateShort(name, c));
				}
			}
		}

		Ok(())
	}
}



/// # Valid Name?
///
/// Names must start with an ASCII alphanumeric; everything after may also be
/// `-` or `_`.
const fn valid_name(bytes: &[u8]) -> bool {
	if let [b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9', rest @ ..] = bytes {
		valid_suffix(rest)
	}
	else { false }
}

/// # Valid Name Suffix?
///
/// Check that all bytes are ASCII alphanumeric, `-`, or `_`.
const fn valid_suffix(mut bytes: &[u8]) -> bool {
	while let [b'-' | b'_' | b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9', rest @ ..] = bytes {
		bytes = rest;
	}
	bytes.is_empty()
}
