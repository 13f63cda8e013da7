mod search;

pub use search::astar::{
    AStar, ExpansionEvent, SearchConfig, SearchConfigError, SearchMetrics, SearchOutcome,
    SearchPhase, SolveReport,
};
pub use search::closed::ClosedSet;
pub use search::domain::SearchDomain;
pub use search::error::{HeapError, SearchError};
pub use search::heap::IndexedHeap;
pub use search::ids::StateId;
