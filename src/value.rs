//! The tri-state container itself.
//!
//! [`TriState<T>`] distinguishes three conditions for a field:
//!
//! - [`Absent`](TriState::Absent) - the field was never provided. This is the
//!   default state; a field that is missing from a JSON document or was never
//!   selected in a query stays here.
//! - [`Null`](TriState::Null) - the field was provided and is explicitly
//!   empty (JSON `null`, SQL `NULL`).
//! - [`Value`](TriState::Value) - the field holds a concrete `T`.
//!
//! The distinction matters whenever a two-state in-memory model (`Option`)
//! meets a three-state wire or storage format: JSON has `missing key`,
//! `"field": null`, and `"field": value`; a relational column has
//! `not fetched`, `NULL`, and `value`.

/// The payload-free state tag of a [`TriState<T>`].
///
/// Returned by [`TriState::state`] for matching on the state without
/// borrowing the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// No value was ever provided.
    #[default]
    Absent,
    /// A value was provided and it is explicitly empty.
    Null,
    /// A concrete value is held.
    Present,
}

/// A tri-state optional value: absent, explicitly null, or present.
///
/// `Absent` and `Null` are both "no usable value" states but stay
/// distinguishable: `Absent` means "treat as if the field were never
/// communicated" (omit on re-serialization, skip in partial updates), `Null`
/// means "explicitly communicate the absence of a value."
///
/// The enum variants are the constructors; [`Default`] yields
/// [`Absent`](TriState::Absent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriState<T> {
    /// No value was ever provided.
    Absent,
    /// A value was provided and it is explicitly empty.
    Null,
    /// A concrete value is held.
    Value(T),
}

impl<T> TriState<T> {
    /// Returns the payload-free state tag.
    #[must_use]
    pub fn state(&self) -> State {
        match self {
            Self::Absent => State::Absent,
            Self::Null => State::Null,
            Self::Value(_) => State::Present,
        }
    }

    /// True iff a concrete value is held.
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// True iff the value is explicitly null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True iff no value was ever provided (the default state).
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// True iff the field participated at all, i.e. it is null or present.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.is_absent()
    }

    /// Borrows the held value, if present.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Consumes the container, returning the held value if present.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the held value, or `fallback` when absent or null.
    #[must_use]
    pub fn value_or(self, fallback: T) -> T {
        self.into_value().unwrap_or(fallback)
    }

    /// Returns the held value, or `T::default()` when absent or null.
    #[must_use]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.into_value().unwrap_or_default()
    }

    /// Applies `f` to a held value; `Absent` and `Null` pass through.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> TriState<U> {
        match self {
            Self::Absent => TriState::Absent,
            Self::Null => TriState::Null,
            Self::Value(v) => TriState::Value(f(v)),
        }
    }

    /// Stores `value`, transitioning to `Value`.
    pub fn set(&mut self, value: T) {
        *self = Self::Value(value);
    }

    /// Transitions to `Null`, dropping any held value.
    pub fn set_null(&mut self) {
        *self = Self::Null;
    }

    /// Transitions back to `Absent`, dropping any held value.
    pub fn reset(&mut self) {
        *self = Self::Absent;
    }

    /// Stores a value from `opt`, or transitions to `Null` on `None`.
    pub fn set_opt(&mut self, opt: Option<T>) {
        *self = Self::from_option(opt);
    }

    /// `Some(v)` gives `Value(v)`; `None` gives `Null`.
    ///
    /// Use [`from_option_or`](Self::from_option_or) to get `Absent` on `None`
    /// instead.
    #[must_use]
    pub fn from_option(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Self::Value)
    }

    /// `Some(v)` gives `Value(v)`; `None` gives `on_none`.
    #[must_use]
    pub fn from_option_or(opt: Option<T>, on_none: Self) -> Self {
        opt.map_or(on_none, Self::Value)
    }

    /// `Value(value)` if `cond` holds, else `Absent`.
    ///
    /// Use [`when_or`](Self::when_or) to choose a different else-state.
    #[must_use]
    pub fn when(cond: bool, value: T) -> Self {
        Self::when_or(cond, value, Self::Absent)
    }

    /// `Value(value)` if `cond` holds, else `otherwise`.
    #[must_use]
    pub fn when_or(cond: bool, value: T, otherwise: Self) -> Self {
        if cond { Self::Value(value) } else { otherwise }
    }

    /// Builds a container by mutating an `Absent` starting point.
    ///
    /// Useful for conditional multi-step construction:
    ///
    /// ```
    /// use tristate::TriState;
    ///
    /// let shutdown = false;
    /// let v: TriState<i64> = TriState::build(|v| {
    ///     if shutdown {
    ///         v.set_null();
    ///     }
    /// });
    /// assert!(v.is_absent());
    /// ```
    #[must_use]
    pub fn build(f: impl FnOnce(&mut Self)) -> Self {
        let mut value = Self::Absent;
        f(&mut value);
        value
    }
}

// Hand-written so `default()` stays available for any `T`.
impl<T> Default for TriState<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for TriState<T> {
    fn from(opt: Option<T>) -> Self {
        Self::from_option(opt)
    }
}
