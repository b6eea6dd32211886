//! Puzzle registry for managing and creating solver instances

use crate::error::{ParseError, PuzzleError, RegistrationError};
use crate::id::{PuzzleId, Sample};
use crate::instance::{DynPuzzle, PuzzleInstance};
use std::collections::BTreeMap;

/// Factory function type for creating puzzle instances
pub type PuzzleFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynPuzzle + 'a>, ParseError>>;

/// Metadata about a registered puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleInfo {
    /// The puzzle id
    pub id: PuzzleId,
    /// Number of parts this puzzle declares
    pub parts: u8,
    /// Embedded self-test cases
    pub samples: &'static [Sample],
}

/// Factory entry with metadata
struct PuzzleEntry {
    factory: PuzzleFactory,
    parts: u8,
    samples: &'static [Sample],
}

/// Builder for constructing a PuzzleRegistry with fluent API
///
/// The builder pattern allows for method chaining and ensures the registry
/// is immutable after construction. It also provides duplicate detection
/// during registration.
///
/// # Example
///
/// ```no_run
/// # use puzzle_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: BTreeMap<PuzzleId, PuzzleEntry>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register a puzzle factory with explicit metadata
    ///
    /// Returns an error if a puzzle is already registered under the given id.
    ///
    /// # Arguments
    /// * `id` - The puzzle id
    /// * `parts` - Number of parts the puzzle declares
    /// * `samples` - Embedded self-test cases
    /// * `factory` - A function that takes input and returns a boxed DynPuzzle
    pub fn register_factory<F>(
        mut self,
        id: PuzzleId,
        parts: u8,
        samples: &'static [Sample],
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynPuzzle + 'a>, ParseError> + 'static,
    {
        if self.entries.contains_key(&id) {
            return Err(RegistrationError::DuplicatePuzzle(id));
        }
        self.entries.insert(
            id,
            PuzzleEntry {
                factory: Box::new(factory),
                parts,
                samples,
            },
        );
        Ok(self)
    }

    /// Register a puzzle type, deriving metadata and factory from its `Puzzle` impl
    pub fn register<P>(self, id: PuzzleId) -> Result<Self, RegistrationError>
    where
        P: crate::solver::Puzzle + 'static,
    {
        self.register_factory(id, P::PARTS, P::SAMPLES, move |input: &str| {
            Ok(Box::new(PuzzleInstance::<P>::new(id, input)?))
        })
    }

    /// Register all collected puzzle plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!` and
    /// registers each one with the builder.
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with all plugins registered
    /// * `Err(RegistrationError)` - Duplicate puzzle found
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    /// Register puzzle plugins that match the given filter predicate
    ///
    /// Only registers plugins for which the filter function returns `true`.
    /// This allows selective registration based on tags, event, year, or
    /// any other criteria.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use puzzle_solver::RegistryBuilder;
    /// // Register only 2023 adventofcode puzzles
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins(|plugin| plugin.event == "adventofcode" && plugin.year == 2023)
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&PuzzlePlugin) -> bool,
    {
        for plugin in inventory::iter::<PuzzlePlugin>() {
            if filter(plugin) {
                let id = PuzzleId::new(plugin.event, plugin.year, plugin.day);
                self = plugin.puzzle.register_with(self, id)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> PuzzleRegistry {
        PuzzleRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating puzzle instances
///
/// The registry maps puzzle ids to factory functions plus metadata. Once
/// built, it cannot be modified. Iteration yields entries in id order.
pub struct PuzzleRegistry {
    entries: BTreeMap<PuzzleId, PuzzleEntry>,
}

impl PuzzleRegistry {
    /// Create a puzzle instance for a specific id
    ///
    /// # Arguments
    /// * `id` - The puzzle id
    /// * `input` - The input string for the puzzle
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynPuzzle>)` - Successfully created instance
    /// * `Err(PuzzleError)` - Puzzle not found or parsing failed
    pub fn create<'a>(
        &self,
        id: PuzzleId,
        input: &'a str,
    ) -> Result<Box<dyn DynPuzzle + 'a>, PuzzleError> {
        let entry = self.entries.get(&id).ok_or(PuzzleError::NotFound(id))?;
        (entry.factory)(input).map_err(PuzzleError::Parse)
    }

    /// Iterate over metadata for all registered puzzles, in id order
    pub fn iter_info(&self) -> impl Iterator<Item = PuzzleInfo> + '_ {
        self.entries.iter().map(|(id, e)| PuzzleInfo {
            id: *id,
            parts: e.parts,
            samples: e.samples,
        })
    }

    /// Get metadata for a specific puzzle
    pub fn get_info(&self, id: PuzzleId) -> Option<PuzzleInfo> {
        self.entries.get(&id).map(|e| PuzzleInfo {
            id,
            parts: e.parts,
            samples: e.samples,
        })
    }

    /// Check if a puzzle is registered
    pub fn contains(&self, id: PuzzleId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Get the number of registered puzzles
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trait for puzzles that can register themselves with a registry builder
///
/// This trait provides a type-erased interface for puzzles to self-register.
/// Unlike the `Puzzle` trait which has associated types, this trait has no
/// associated types, allowing for collection of different puzzle types in a
/// single container.
///
/// # Automatic Implementation
///
/// Any type implementing `Puzzle` automatically gets a `RegisterablePuzzle`
/// implementation through a blanket impl, enabling it to be used in the
/// plugin system with the fluent builder API.
pub trait RegisterablePuzzle: Sync {
    /// Register this puzzle type with the builder under the given id
    fn register_with(
        &self,
        builder: RegistryBuilder,
        id: PuzzleId,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Get the number of parts this puzzle declares
    fn parts(&self) -> u8;

    /// Get the embedded samples for this puzzle
    fn samples(&self) -> &'static [Sample];
}

/// Blanket implementation of RegisterablePuzzle for all Puzzle types
impl<P> RegisterablePuzzle for P
where
    P: crate::solver::Puzzle + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        id: PuzzleId,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register::<P>(id)
    }

    fn parts(&self) -> u8 {
        P::PARTS
    }

    fn samples(&self) -> &'static [Sample] {
        P::SAMPLES
    }
}

/// Plugin information for automatic puzzle registration
///
/// This struct holds metadata about a puzzle plugin: its id components, a
/// type-erased puzzle instance, and optional tags for filtering.
///
/// # Example
///
/// ```no_run
/// use puzzle_solver::{ParseError, Puzzle, PuzzleParser, PuzzlePlugin, SolveError};
///
/// struct Day6;
///
/// impl PuzzleParser for Day6 {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Puzzle for Day6 {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// inventory::submit! {
///     PuzzlePlugin {
///         event: "adventofcode",
///         year: 2023,
///         day: 6,
///         puzzle: &Day6,
///         tags: &["2023", "easy"],
///     }
/// }
/// ```
pub struct PuzzlePlugin {
    /// Event family the puzzle belongs to
    pub event: &'static str,
    /// The puzzle year
    pub year: u16,
    /// The day number (1-25 for adventofcode)
    pub day: u8,
    /// The puzzle instance (type-erased)
    pub puzzle: &'static dyn RegisterablePuzzle,
    /// Optional tags for filtering (e.g. "easy", "math", "2023")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(PuzzlePlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::{Puzzle, PuzzleParser};

    struct Doubler;

    impl PuzzleParser for Doubler {
        type SharedData<'a> = i64;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat("expected integer".to_string()))
        }
    }

    impl Puzzle for Doubler {
        const PARTS: u8 = 1;
        const SAMPLES: &'static [Sample] = &[Sample::new(1, "21", "42")];

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok((*shared * 2).to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    const ID: PuzzleId = PuzzleId::new("test", 2023, 1);

    #[test]
    fn test_register_and_create() {
        let registry = RegistryBuilder::new().register::<Doubler>(ID).unwrap().build();

        let mut instance = registry.create(ID, "21").unwrap();
        let result = instance.solve(1).unwrap();
        assert_eq!(result.answer, "42");
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let builder = RegistryBuilder::new().register::<Doubler>(ID).unwrap();
        // err().unwrap(): RegistryBuilder has no Debug impl, so unwrap_err
        // on the Result does not compile.
        let err = builder.register::<Doubler>(ID).err().unwrap();
        assert!(matches!(err, RegistrationError::DuplicatePuzzle(id) if id == ID));
    }

    #[test]
    fn test_unknown_id_not_found() {
        let registry = RegistryBuilder::new().build();
        let err = registry.create(ID, "21").err().unwrap();
        assert!(matches!(err, PuzzleError::NotFound(id) if id == ID));
    }

    #[test]
    fn test_parse_error_propagates() {
        let registry = RegistryBuilder::new().register::<Doubler>(ID).unwrap().build();
        let err = registry.create(ID, "not a number").err().unwrap();
        assert!(matches!(err, PuzzleError::Parse(_)));
    }

    #[test]
    fn test_info_carries_samples() {
        let registry = RegistryBuilder::new().register::<Doubler>(ID).unwrap().build();
        let info = registry.get_info(ID).unwrap();
        assert_eq!(info.parts, 1);
        assert_eq!(info.samples.len(), 1);
        assert_eq!(info.samples[0].expected, "42");
    }

    #[test]
    fn test_iter_info_in_id_order() {
        let registry = RegistryBuilder::new()
            .register::<Doubler>(PuzzleId::new("b", 2022, 4))
            .unwrap()
            .register::<Doubler>(PuzzleId::new("a", 2023, 6))
            .unwrap()
            .register::<Doubler>(PuzzleId::new("a", 2023, 2))
            .unwrap()
            .build();

        let ids: Vec<_> = registry.iter_info().map(|i| i.id).collect();
        assert_eq!(
            ids,
            vec![
                PuzzleId::new("a", 2023, 2),
                PuzzleId::new("a", 2023, 6),
                PuzzleId::new("b", 2022, 4),
            ]
        );
    }
}
