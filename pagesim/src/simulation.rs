use log::{debug, info, trace};

use crate::error::Result;
use crate::frame_table::FrameTable;
use crate::page_replacer::{PageEvent, PageReplacer, PolicyKind};
use crate::reference::{Page, ReferenceString};

/// Se o acesso do passo `step` causou page fault.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FaultRecord {
    pub step: usize,
    pub fault: bool,
}

/// Histórico dos frames: uma linha por frame, uma coluna por passo.
///
/// Só os passos com page fault mostram o conteúdo dos frames; nos outros a
/// coluna inteira fica em branco (`None`). Slot vazio num passo com fault
/// também aparece como `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryGrid {
    rows: Vec<Vec<Option<Page>>>,
}

impl HistoryGrid {
    fn new(frame_count: usize, steps: usize) -> Self {
        HistoryGrid {
            rows: vec![Vec::with_capacity(steps); frame_count],
        }
    }

    fn record(&mut self, frames: &FrameTable, fault: bool) {
        for (row, slot) in self.rows.iter_mut().zip(frames.iter()) {
            row.push(if fault { slot } else { None });
        }
    }

    pub fn rows(&self) -> &[Vec<Option<Page>>] {
        &self.rows
    }

    pub fn frame_count(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn cell(&self, frame: usize, step: usize) -> Option<Page> {
        self.rows.get(frame).and_then(|row| row.get(step).copied().flatten())
    }

    /// Conteúdo de todos os frames no passo `step`, de cima para baixo.
    pub fn column(&self, step: usize) -> Vec<Option<Page>> {
        self.rows.iter().map(|row| row.get(step).copied().flatten()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationResult {
    pub policy: PolicyKind,
    pub frame_count: usize,
    pub fault_count: usize,
    pub faults: Vec<FaultRecord>,
    pub history: HistoryGrid,
}

impl SimulationResult {
    pub fn steps(&self) -> usize {
        self.faults.len()
    }

    pub fn hit_count(&self) -> usize {
        self.steps() - self.fault_count
    }

    /// Fração dos acessos que deram page fault. Zero para reference string vazia.
    pub fn fault_ratio(&self) -> f64 {
        if self.steps() == 0 {
            return 0.0;
        }

        self.fault_count as f64 / self.steps() as f64
    }
}

/// Roda uma política sobre uma reference string.
///
/// O laço é o mesmo para todas as políticas; a única coisa que muda é a
/// decisão de onde colocar a página, que fica com o `REPLACER`.
pub struct Simulation<REPLACER: PageReplacer> {
    replacer: REPLACER,
    frame_count: usize,
}

impl<REPLACER: PageReplacer> Simulation<REPLACER> {
    pub fn new(replacer: REPLACER, frame_count: usize) -> Result<Self> {
        // valida aqui para nenhuma execução começar com zero frames
        FrameTable::new(frame_count)?;

        Ok(Simulation { replacer, frame_count })
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    fn handle_page_fault(
        &mut self,
        frames: &mut FrameTable,
        reference: &ReferenceString,
        step: usize,
        page: Page,
    ) {
        let slot = self.replacer.pick_slot(frames, reference, step);

        match frames.place(slot, page) {
            Some(evicted) => debug!(
                "sim[{}]: passo {}: página {} despejada do frame {} para dar lugar à {}",
                self.replacer.kind(),
                step,
                evicted,
                slot,
                page
            ),
            None => debug!(
                "sim[{}]: passo {}: página {} carregada no frame vazio {}",
                self.replacer.kind(),
                step,
                page,
                slot
            ),
        }

        self.replacer.page_event(PageEvent::Loaded { page, slot, step });
    }

    pub fn run(&mut self, reference: &ReferenceString) -> Result<SimulationResult> {
        let policy = self.replacer.kind();
        let mut frames = FrameTable::new(self.frame_count)?;
        let mut history = HistoryGrid::new(self.frame_count, reference.len());
        let mut faults = Vec::with_capacity(reference.len());
        let mut fault_count = 0;

        self.replacer.reset();

        for (step, page) in reference.iter().enumerate() {
            let fault = !frames.contains(page);

            if fault {
                trace!("sim[{}]: passo {}: page fault na página {}", policy, step, page);
                self.handle_page_fault(&mut frames, reference, step, page);
                fault_count += 1;
            } else {
                trace!("sim[{}]: passo {}: page hit na página {}", policy, step, page);
            }

            self.replacer.page_event(PageEvent::Touched { page, step });

            history.record(&frames, fault);
            faults.push(FaultRecord { step, fault });
        }

        info!(
            "sim[{}]: {} frames, {} acessos, {} page faults",
            policy,
            self.frame_count,
            reference.len(),
            fault_count
        );

        Ok(SimulationResult {
            policy,
            frame_count: self.frame_count,
            fault_count,
            faults,
            history,
        })
    }
}

pub fn simulate(kind: PolicyKind, reference: &ReferenceString, frame_count: usize) -> Result<SimulationResult> {
    Simulation::new(kind.replacer(), frame_count)?.run(reference)
}

/// FIFO, LRU e Optimal, nessa ordem, sobre a mesma entrada.
pub fn simulate_all(reference: &ReferenceString, frame_count: usize) -> Result<Vec<SimulationResult>> {
    PolicyKind::ALL
        .iter()
        .map(|kind| simulate(*kind, reference, frame_count))
        .collect()
}
