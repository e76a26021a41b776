//! Symbol record types.

/// Data type of a symbol, when one is known.
///
/// Types are only recorded where they are derivable without inference
/// (literal initializers); the target VM enforces operand types at
/// runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    Int,
    Double,
    String,
    Bool,
    Null,
}

/// What kind of entity a symbol names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    Variable,
    Function,
}

/// A symbol record stored in a scope frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SymbolInfo {
    /// Variable or function.
    pub kind: SymbolKind,
    /// Known data type, if derivable.
    pub data_type: Option<DataType>,
    /// True for `__`-prefixed process-wide bindings.
    pub global: bool,
    /// True once the symbol has a value (declared with an initializer,
    /// or assigned to).
    pub defined: bool,
}

impl SymbolInfo {
    /// A variable record.
    pub fn variable(data_type: Option<DataType>, global: bool, defined: bool) -> Self {
        Self {
            kind: SymbolKind::Variable,
            data_type,
            global,
            defined,
        }
    }

    /// A function record; functions are defined at declaration.
    pub fn function() -> Self {
        Self {
            kind: SymbolKind::Function,
            data_type: None,
            global: false,
            defined: true,
        }
    }
}
