//! Macros for ergonomic transition registration.

/// Build a source → destination map for [`StateMachine::when`].
///
/// [`StateMachine::when`]: crate::StateMachine::when
///
/// # Example
///
/// ```
/// use switchyard::{transitions, StateMachine};
///
/// let mut machine: StateMachine = StateMachine::new("off");
/// machine.when("ignition", transitions! { "off" => "park" });
/// machine.when("reset", transitions! { "any" => "off" });
///
/// assert!(machine.trigger("ignition"));
/// assert_eq!(machine.state(), "park");
/// ```
#[macro_export]
macro_rules! transitions {
    ($($from:expr => $to:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut rows = ::std::collections::HashMap::<
            ::std::string::String,
            ::std::string::String,
        >::new();
        $(
            rows.insert(
                ::std::string::String::from($from),
                ::std::string::String::from($to),
            );
        )*
        rows
    }};
}
