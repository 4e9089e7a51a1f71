//! End-to-end usage scenarios for geometry sets and their iterators
