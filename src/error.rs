/*!
# Argtree: Errors

This is the obligatory error enum. Construction-time mistakes (bad names,
duplicates) and parse-time failures share the same type so callers only ever
have to deal with one thing.
*/

use std::{
	error::Error,
	fmt,
};



/// # Action Error.
///
/// This is the error type bound actions may return. Anything boxable works.
pub type ActionError = Box<dyn Error + Send + Sync + 'static>;



#[derive(Debug)]
/// # Error Struct.
pub enum ArgtreeError {
	/// # Action Failed.
	///
	/// A bound action returned an error. The name is that of the subcommand
	/// owning the action, or `None` for the root.
	Action(Option<&'static str>, ActionError),

	/// # Duplicate Name.
	///
	/// Two siblings were declared with the same name.
	DuplicateName(&'static str),

	/// # Duplicate Short Alias.
	///
	/// Two siblings were declared with the same short alias.
	DuplicateShort(&'static str, char),

	/// # Empty Invocation.
	///
	/// There were no arguments at all, but the named descriptor needed one.
	EmptyInvocation(&'static str),

	/// # Invalid Choice.
	///
	/// The value for a one-of descriptor is not among its candidates.
	InvalidChoice(&'static str, String),

	/// # Invalid Name.
	InvalidName(&'static str),

	/// # Invalid Short Alias.
	InvalidShort(&'static str, char),

	/// # Missing Required Argument.
	MissingRequiredArgument(&'static str),

	/// # Missing Value.
	///
	/// The marker was found, but nothing follows it.
	MissingValue(&'static str),

	/// # No Candidates.
	///
	/// A one-of descriptor was declared with an empty candidate list.
	NoCandidates(&'static str),

	/// # Subcommand Mismatch.
	///
	/// A subcommand was asked to parse tokens that don't begin with its name.
	SubcommandMismatch(&'static str),
}

impl Error for ArgtreeError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		if let Self::Action(_, e) = self { Some(e.as_ref()) }
		else { None }
	}
}

impl fmt::Display for ArgtreeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Action(Some(n), e) => write!(f, "{} {e} ({n})", self.as_str()),
			Self::Action(None, e) => write!(f, "{} {e}", self.as_str()),
			Self::DuplicateShort(n, c) | Self::InvalidShort(n, c) =>
				write!(f, "{} -{c} ({n})", self.as_str()),
			Self::InvalidChoice(n, v) => write!(f, "{} {v:?} ({n})", self.as_str()),
			Self::DuplicateName(n)
				| Self::EmptyInvocation(n)
				| Self::InvalidName(n)
				| Self::MissingRequiredArgument(n)
				| Self::MissingValue(n)
				| Self::NoCandidates(n)
				| Self::SubcommandMismatch(n) => write!(f, "{} {n}", self.as_str()),
		}
	}
}

impl ArgtreeError {
	#[must_use]
	/// # Exit Code.
	///
	/// Every error is a failure, so this is always `1`. It exists mostly so
	/// entry points don't have to hardcode it.
	pub const fn exit_code(&self) -> i32 { 1 }

	#[must_use]
	/// # Name.
	///
	/// Return the name of the offending descriptor, if any.
	pub const fn name(&self) -> Option<&'static str> {
		match self {
			Self::Action(n, _) => *n,
			Self::DuplicateName(n)
				| Self::DuplicateShort(n, _)
				| Self::EmptyInvocation(n)
				| Self::InvalidChoice(n, _)
				| Self::InvalidName(n)
				| Self::InvalidShort(n, _)
				| Self::MissingRequiredArgument(n)
				| Self::MissingValue(n)
				| Self::NoCandidates(n)
				| Self::SubcommandMismatch(n) => Some(*n),
		}
	}

	#[must_use]
	/// # As Str.
	///
	/// Return a short, static summary of the error kind.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Action(_, _) => "Action failed:",
			Self::DuplicateName(_) => "Duplicate name:",
			Self::DuplicateShort(_, _) => "Duplicate short alias:",
			Self::EmptyInvocation(_) => "Missing arguments; expected at least",
			Self::InvalidChoice(_, _) => "Invalid choice:",
			Self::InvalidName(_) => "Invalid name:",
			Self::InvalidShort(_, _) => "Invalid short alias:",
			Self::MissingRequiredArgument(_) => "Missing required argument:",
			Self::MissingValue(_) => "Missing value for",
			Self::NoCandidates(_) => "No candidates for",
			Self::SubcommandMismatch(_) => "Subcommand mismatch:",
		}
	}
}
