pub mod wide_events;
