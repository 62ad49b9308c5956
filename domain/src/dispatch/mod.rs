//! Fan-out results: what each model answered and how long it took.

pub mod value_objects;
