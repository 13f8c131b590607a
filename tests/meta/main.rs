//! Structural checks over the source and test trees

mod coverage;
