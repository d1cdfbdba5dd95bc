//! Table modules. Each contains an `impl Database` block for one table.

mod notes;
