use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tracing::debug;

use crate::json::{DistillError, Result, TypeDescriptor};

type Thunk<'a, T> = Box<dyn FnOnce() -> Result<T> + 'a>;

enum State<'a, T> {
	Pending(Thunk<'a, T>),
	Value(T),
	Error(DistillError),
}

/// Single-shot, lazily evaluated extraction with chainable transforms.
///
/// A chain is in exactly one of three states: pending (a deferred computation),
/// resolved, or failed. Every combinator consumes the chain. Once failed, only
/// the error-recovery combinators ([`recover`](Self::recover),
/// [`recover_with`](Self::recover_with), [`map_error`](Self::map_error),
/// [`flat_map_error`](Self::flat_map_error)) have any effect.
#[must_use = "a distillate does nothing until it is evaluated or observed"]
pub struct Distillate<'a, T> {
	state: State<'a, T>,
}

impl<'a, T: 'a> Distillate<'a, T> {
	/// Already-resolved chain.
	pub fn just(value: T) -> Self {
		Self { state: State::Value(value) }
	}

	/// Already-failed chain.
	pub fn error(err: DistillError) -> Self {
		Self { state: State::Error(err) }
	}

	/// Already-failed chain carrying a caller-defined error.
	pub fn custom_error<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
		Self::error(DistillError::custom(err))
	}

	/// Chain failed with [`DistillError::FilteredValue`] for `T` and an empty payload.
	pub fn filtered() -> Self
	where
		T: 'static,
	{
		Self::error(DistillError::filtered_unit::<T>())
	}

	/// Chain deferred until evaluation.
	pub fn pending(compute: impl FnOnce() -> Result<T> + 'a) -> Self {
		Self {
			state: State::Pending(Box::new(compute)),
		}
	}

	/// Chain already holding `result`.
	pub fn from_result(result: Result<T>) -> Self {
		match result {
			Ok(value) => Self::just(value),
			Err(err) => Self::error(err),
		}
	}

	/// Return whether the deferred computation has not run yet.
	pub fn is_pending(&self) -> bool {
		matches!(self.state, State::Pending(_))
	}

	/// Force the chain, yielding the value or the captured error.
	pub fn evaluate(self) -> Result<T> {
		match self.state {
			State::Pending(compute) => compute(),
			State::Value(value) => Ok(value),
			State::Error(err) => Err(err),
		}
	}

	/// Force the chain, discarding any error.
	pub fn ok(self) -> Option<T> {
		self.evaluate().ok()
	}

	fn and_then<U: 'a>(self, step: impl FnOnce(T) -> Result<U> + 'a) -> Distillate<'a, U> {
		match self.state {
			State::Pending(compute) => Distillate::pending(move || compute().and_then(step)),
			State::Value(value) => Distillate::from_result(step(value)),
			State::Error(err) => Distillate::error(err),
		}
	}

	fn or_else(self, step: impl FnOnce(DistillError) -> Result<T> + 'a) -> Self {
		match self.state {
			State::Pending(compute) => Self::pending(move || compute().or_else(step)),
			State::Value(value) => Self::just(value),
			State::Error(err) => Self::from_result(step(err)),
		}
	}

	/// Transform the resolved value.
	pub fn map<U: 'a>(self, f: impl FnOnce(T) -> U + 'a) -> Distillate<'a, U> {
		self.and_then(move |value| Ok(f(value)))
	}

	/// Chain a dependent extraction.
	pub fn flat_map<U: 'a>(self, f: impl FnOnce(T) -> Distillate<'a, U> + 'a) -> Distillate<'a, U> {
		self.and_then(move |value| f(value).evaluate())
	}

	/// Chain a transform that may produce no value.
	///
	/// `None` fails the chain with [`DistillError::FilteredValue`] carrying the input value,
	/// which must implement `Clone` and `Debug`.
	pub fn flat_map_option<U: 'a>(self, f: impl FnOnce(T) -> Option<U> + 'a) -> Distillate<'a, U>
	where
		T: Clone + fmt::Debug + Send + Sync + 'static,
	{
		self.and_then(move |value| {
			let kept = value.clone();
			f(value).ok_or_else(|| reject(kept))
		})
	}

	/// Keep the value only if `predicate` accepts it.
	///
	/// A rejection fails with [`DistillError::FilteredValue`] carrying the value and its
	/// `Debug` rendering, so `T` must implement `Debug`.
	pub fn filter(self, predicate: impl FnOnce(&T) -> bool + 'a) -> Self
	where
		T: fmt::Debug + Send + Sync + 'static,
	{
		self.and_then(move |value| if predicate(&value) { Ok(value) } else { Err(reject(value)) })
	}

	/// Replace a failure with `default`. A resolved value is kept.
	pub fn recover(self, default: T) -> Self {
		self.or_else(move |_| Ok(default))
	}

	/// Replace a failure with a value computed from the error.
	pub fn recover_with(self, f: impl FnOnce(DistillError) -> T + 'a) -> Self {
		self.or_else(move |err| Ok(f(err)))
	}

	/// Transform a failure.
	pub fn map_error(self, f: impl FnOnce(DistillError) -> DistillError + 'a) -> Self {
		self.or_else(move |err| Err(f(err)))
	}

	/// Recover from a failure with another chain.
	pub fn flat_map_error(self, f: impl FnOnce(DistillError) -> Distillate<'a, T> + 'a) -> Self {
		self.or_else(move |err| f(err).evaluate())
	}

	/// Force the chain and pass the resolved value to `observer`.
	pub fn success(self, observer: impl FnOnce(&T)) -> Self {
		let result = self.evaluate();
		if let Ok(value) = &result {
			observer(value);
		}
		Self::from_result(result)
	}

	/// Force the chain and pass the captured error to `observer`.
	pub fn failure(self, observer: impl FnOnce(&DistillError)) -> Self {
		let result = self.evaluate();
		if let Err(err) = &result {
			observer(err);
		}
		Self::from_result(result)
	}
}

fn reject<T: fmt::Debug + Send + Sync + 'static>(value: T) -> DistillError {
	debug!(type_name = TypeDescriptor::of::<T>().name(), value = ?value, "value filtered");
	DistillError::filtered(value)
}

impl<'a, T: 'a> Distillate<'a, Option<T>> {
	/// Substitute `default` for an absent value.
	pub fn replace_nil(self, default: T) -> Distillate<'a, T> {
		self.map(move |value| value.unwrap_or(default))
	}

	/// Fail with [`DistillError::FilteredValue`] when the value is absent.
	pub fn filter_nil(self) -> Distillate<'a, T>
	where
		T: fmt::Debug + Send + Sync + 'static,
	{
		self.and_then(|value| value.ok_or_else(|| reject(None::<T>)))
	}
}

impl<'a, T: Emptiable + 'a> Distillate<'a, T> {
	/// Substitute `default` for an empty collection.
	pub fn replace_empty(self, default: T) -> Self {
		self.map(move |value| if value.is_empty() { default } else { value })
	}

	/// Fail with [`DistillError::FilteredValue`] when the collection is empty.
	///
	/// The rejected collection is rendered with `Debug`.
	pub fn filter_empty(self) -> Self
	where
		T: fmt::Debug + Send + Sync + 'static,
	{
		self.filter(|value| !value.is_empty())
	}
}

impl<T: fmt::Debug> fmt::Debug for Distillate<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.state {
			State::Pending(_) => f.write_str("Distillate::Pending"),
			State::Value(value) => f.debug_tuple("Distillate::Value").field(value).finish(),
			State::Error(err) => f.debug_tuple("Distillate::Error").field(err).finish(),
		}
	}
}

/// Collections with a notion of emptiness.
pub trait Emptiable {
	/// Return whether the collection has no elements.
	fn is_empty(&self) -> bool;
}

impl<T> Emptiable for Vec<T> {
	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl<K, V, S> Emptiable for HashMap<K, V, S> {
	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl<K, V> Emptiable for BTreeMap<K, V> {
	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Emptiable for String {
	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
