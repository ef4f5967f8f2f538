//! The scope stack and its parallel offset stack.
//!
//! Unlike a name-resolution rib arena that keeps every scope addressable
//! forever (useful when a persistent HIR gets revisited across passes), this
//! analyzer makes one linear walk over the AST: scopes really do pop. Symbol
//! entries, though, persist after their scope closes — only *visibility*
//! collapses, so the final entry list still reports every declaration ever
//! made, in the order it was made.

use snlc_util::{FxHashMap, Symbol};

use crate::types::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Type,
    Variable,
    ValueParam,
    VarParam,
    Procedure,
    Program,
    Field,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Type => "type",
            SymbolKind::Variable => "variable",
            SymbolKind::ValueParam => "value-param",
            SymbolKind::VarParam => "var-param",
            SymbolKind::Procedure => "procedure",
            SymbolKind::Program => "program",
            SymbolKind::Field => "field",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SymbolEntry {
    pub name: Symbol,
    pub kind: SymbolKind,
    pub ty: Type,
    pub level: usize,
    pub offset: i64,
}

/// Append-only entry log plus a stack of name-to-entry-index maps (the
/// visibility window) and a parallel stack of next-free-offset counters.
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    scopes: Vec<FxHashMap<Symbol, usize>>,
    offsets: Vec<i64>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            scopes: vec![FxHashMap::default()],
            offsets: vec![0],
        }
    }

    pub fn level(&self) -> usize {
        self.scopes.len() - 1
    }

    pub fn enter_scope(&mut self) {
        self.scopes.push(FxHashMap::default());
        self.offsets.push(0);
    }

    pub fn exit_scope(&mut self) {
        self.scopes.pop();
        self.offsets.pop();
    }

    /// The next free offset in the current scope, without consuming it.
    pub fn current_offset(&self) -> i64 {
        *self.offsets.last().expect("scope stack is never empty")
    }

    /// Returns the offset assigned to a `size`-unit allocation in the current
    /// scope and advances that scope's counter past it.
    pub fn allocate(&mut self, size: i64) -> i64 {
        let top = self.offsets.last_mut().expect("scope stack is never empty");
        let assigned = *top;
        *top += size;
        assigned
    }

    pub fn is_declared_in_current_scope(&self, name: Symbol) -> bool {
        self.scopes.last().expect("scope stack is never empty").contains_key(&name)
    }

    /// Inserts a fresh entry into the current scope. Callers must check
    /// [`Self::is_declared_in_current_scope`] first — a redeclaration is a
    /// semantic error, not silently overwritten. Returns the entry's index so
    /// a procedure's placeholder signature can be patched in after its
    /// parameter list is walked (see [`Self::set_type`]).
    pub fn insert(&mut self, name: Symbol, kind: SymbolKind, ty: Type, offset: i64) -> usize {
        let level = self.level();
        let index = self.entries.len();
        self.entries.push(SymbolEntry {
            name,
            kind,
            ty,
            level,
            offset,
        });
        self.scopes.last_mut().expect("scope stack is never empty").insert(name, index);
        index
    }

    /// Overwrites an already-inserted entry's type in place. Used to fill in
    /// a procedure's `Proc` signature once its parameter list is known, since
    /// the entry must exist (for recursive calls) before the body is walked.
    pub fn set_type(&mut self, index: usize, ty: Type) {
        self.entries[index].ty = ty;
    }

    /// Resolves `name` from the innermost visible scope outward.
    pub fn find(&self, name: Symbol) -> Option<&SymbolEntry> {
        for scope in self.scopes.iter().rev() {
            if let Some(&index) = scope.get(&name) {
                return Some(&self.entries[index]);
            }
        }
        None
    }

    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    /// A textual snapshot of every currently-visible scope, innermost last,
    /// for the listing's scope-snapshot points.
    pub fn snapshot(&self) -> String {
        let mut out = String::new();
        for (level, scope) in self.scopes.iter().enumerate() {
            out.push_str(&format!(
                "scope level {level} (next offset {})\n",
                self.offsets[level]
            ));
            let mut names: Vec<_> = scope.keys().collect();
            names.sort_by_key(|s| s.as_str());
            if names.is_empty() {
                out.push_str("  <empty>\n");
            }
            for name in names {
                let entry = &self.entries[scope[name]];
                out.push_str(&format!(
                    "  {:<15} | {:<12} | {:<50} | {:>3} | {:>6}\n",
                    entry.name.as_str(),
                    entry.kind.as_str(),
                    entry.ty.to_string(),
                    entry.level,
                    entry.offset
                ));
            }
        }
        out
    }
}
