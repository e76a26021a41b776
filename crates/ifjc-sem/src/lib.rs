//! ifjc-sem - Semantic analysis for IFJ25 programs.
//!
//! One top-down walk over the AST checks name rules against a lexically
//! scoped symbol store:
//!
//! - [`SymbolTable`]: a height-balanced (AVL) binary search tree keyed
//!   by identifier name, one per scope frame,
//! - [`ScopeStack`]: a stack of frames pushed on entry to class bodies,
//!   function bodies, loop bodies, and condition branches, with
//!   shadowing lookups top to bottom,
//! - [`analyze`]: the walk itself. Redeclaration in a frame reports
//!   exit code 4, use of an undeclared name exit code 3, a call with
//!   the wrong number of arguments exit code 5, and `break`/`continue`
//!   outside a loop exit code 10.
//!
//! Class member functions are registered before the statement walk so a
//! call may precede its callee's definition; variables remain strict
//! use-before-declare.

pub mod analysis;
pub mod scope;
pub mod table;
pub mod types;

mod edge_cases;

pub use analysis::analyze;
pub use scope::ScopeStack;
pub use table::SymbolTable;
pub use types::{DataType, SymbolInfo, SymbolKind};
