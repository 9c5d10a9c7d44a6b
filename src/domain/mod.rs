// Domain layer: the roster data model. No behavior beyond construction
// invariants lives here; pipeline stages are under core.

pub mod model;
