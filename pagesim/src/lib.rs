//! Simulador de políticas de substituição de páginas (FIFO, LRU e Optimal).
//!
//! Dada uma reference string e um número de frames, cada política devolve o
//! total de page faults e o histórico dos frames passo a passo.

pub mod config;
pub mod error;
pub mod frame_table;
pub mod page_replacer;
pub mod reference;
pub mod simulation;

pub use error::{Result, SimError};
pub use frame_table::FrameTable;
pub use page_replacer::{PageReplacer, PolicyKind};
pub use reference::{Page, ReferenceGenerator, ReferenceString};
pub use simulation::{simulate, simulate_all, Simulation, SimulationResult};
