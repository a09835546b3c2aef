use crate::error::Error;
use crate::program::Program;
use crate::scalar::Scalar;
use crate::symbols::SymbolTable;
use log::debug;
use lru::LruCache;
use std::num::NonZeroUsize;

/// LRU cache of compiled programs keyed by formula text.
///
/// Hosts that evaluate a small set of user formulas over and over can skip
/// recompilation. Compile failures propagate to the caller and are not
/// cached.
pub struct FormulaCache<T: Scalar> {
    symbols: SymbolTable<T>,
    programs: LruCache<String, Program<T>>,
}

impl<T: Scalar> FormulaCache<T> {
    /// Creates a cache over the given symbol table holding up to `capacity`
    /// compiled programs (at least one).
    pub fn new(symbols: SymbolTable<T>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            symbols,
            programs: LruCache::new(capacity),
        }
    }

    /// Returns the cached program for `formula`, compiling and caching it on
    /// a miss.
    pub fn get_or_compile(&mut self, formula: &str) -> Result<&Program<T>, Error> {
        if !self.programs.contains(formula) {
            debug!("cache miss, compiling: {formula}");
        }
        let symbols = &self.symbols;
        self.programs
            .try_get_or_insert(formula.to_string(), || crate::compile(formula, symbols))
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}
