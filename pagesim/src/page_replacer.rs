use std::{collections::HashMap, fmt, str::FromStr};

use crate::error::SimError;
use crate::frame_table::FrameTable;
use crate::reference::{Page, ReferenceString};

/// O que o simulador avisa para a política durante uma execução.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PageEvent {
    /// Acesso a `page` no passo `step`, com ou sem page fault. Sempre vem
    /// depois do `Loaded` do mesmo passo.
    Touched { page: Page, step: usize },
    /// `page` acabou de ser colocada em `slot`.
    Loaded { page: Page, slot: usize, step: usize },
}

/// Uma política de substituição de páginas.
///
/// O simulador só chama `pick_slot` quando há page fault, e sempre coloca a
/// página nova no slot devolvido. Cabe à política escolher entre um slot vazio
/// e uma vítima.
pub trait PageReplacer {
    fn kind(&self) -> PolicyKind;

    /// Esquece tudo da execução anterior.
    fn reset(&mut self) {}

    fn page_event(&mut self, _event: PageEvent) {}

    fn pick_slot(&mut self, frames: &FrameTable, reference: &ReferenceString, step: usize) -> usize;
}

impl<R: PageReplacer + ?Sized> PageReplacer for Box<R> {
    fn kind(&self) -> PolicyKind {
        (**self).kind()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn page_event(&mut self, event: PageEvent) {
        (**self).page_event(event)
    }

    fn pick_slot(&mut self, frames: &FrameTable, reference: &ReferenceString, step: usize) -> usize {
        (**self).pick_slot(frames, reference, step)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Optimal,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Optimal];

    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Optimal => "Optimal",
        }
    }

    pub fn replacer(self) -> Box<dyn PageReplacer> {
        match self {
            PolicyKind::Fifo => Box::new(FifoReplacer::new()),
            PolicyKind::Lru => Box::new(LruReplacer::new()),
            PolicyKind::Optimal => Box::new(OptimalReplacer::new()),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "opt" | "optimal" | "belady" => Ok(PolicyKind::Optimal),
            _ => Err(SimError::UnknownPolicy(s.to_string())),
        }
    }
}

/// FIFO com um cursor circular em vez de fila.
///
/// O cursor anda inclusive enquanto os slots vazios vão sendo preenchidos, então
/// quando a tabela enche ele já está apontando para a página mais antiga.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    next: usize,
}

impl FifoReplacer {
    pub fn new() -> Self {
        FifoReplacer { next: 0 }
    }
}

impl PageReplacer for FifoReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn reset(&mut self) {
        self.next = 0;
    }

    fn pick_slot(&mut self, frames: &FrameTable, _reference: &ReferenceString, _step: usize) -> usize {
        let slot = self.next;
        self.next = (self.next + 1) % frames.len();

        slot
    }
}

#[derive(Debug, Default)]
pub struct LruReplacer {
    /// Página -> último passo em que foi acessada.
    last_used: HashMap<Page, usize>,
}

impl LruReplacer {
    pub fn new() -> Self {
        LruReplacer {
            last_used: HashMap::new(),
        }
    }

    pub fn last_used(&self, page: Page) -> Option<usize> {
        self.last_used.get(&page).copied()
    }
}

impl PageReplacer for LruReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn reset(&mut self) {
        self.last_used.clear();
    }

    fn page_event(&mut self, event: PageEvent) {
        if let PageEvent::Touched { page, step } = event {
            self.last_used.insert(page, step);
        }
    }

    fn pick_slot(&mut self, frames: &FrameTable, _reference: &ReferenceString, _step: usize) -> usize {
        if let Some(empty) = frames.first_empty_slot() {
            return empty;
        }

        // `<` estrito: em caso de empate fica o primeiro slot da varredura.
        // Página sem registro (None) conta como a mais antiga de todas.
        let mut victim: Option<(usize, Option<usize>)> = None;
        for (slot, page) in frames.occupied() {
            let stamp = self.last_used(page);
            match victim {
                Some((_, oldest)) if stamp >= oldest => {}
                _ => victim = Some((slot, stamp)),
            }
        }

        victim.map_or(0, |(slot, _)| slot)
    }
}

/// Quando uma página residente vai ser usada de novo.
///
/// `Never` é maior que qualquer `At`, pela ordem das variantes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum NextUse {
    At(usize),
    Never,
}

impl NextUse {
    /// Próxima ocorrência de `page` estritamente depois de `step`.
    pub fn after(reference: &ReferenceString, step: usize, page: Page) -> NextUse {
        reference
            .as_slice()
            .iter()
            .enumerate()
            .skip(step + 1)
            .find(|&(_, &candidate)| candidate == page)
            .map_or(NextUse::Never, |(idx, _)| NextUse::At(idx))
    }
}

/// Belady: despeja quem vai demorar mais para ser usado de novo.
#[derive(Debug, Default)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    pub fn new() -> Self {
        OptimalReplacer
    }
}

impl PageReplacer for OptimalReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
    }

    fn pick_slot(&mut self, frames: &FrameTable, reference: &ReferenceString, step: usize) -> usize {
        if let Some(empty) = frames.first_empty_slot() {
            return empty;
        }

        // `>` estrito: o primeiro slot que atinge o máximo ganha.
        let mut victim: Option<(usize, NextUse)> = None;
        for (slot, page) in frames.occupied() {
            let next_use = NextUse::after(reference, step, page);
            match victim {
                Some((_, farthest)) if next_use <= farthest => {}
                _ => victim = Some((slot, next_use)),
            }
        }

        victim.map_or(0, |(slot, _)| slot)
    }
}
