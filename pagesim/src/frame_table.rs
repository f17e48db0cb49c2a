use crate::error::{Result, SimError};
use crate::reference::Page;

/// Os frames da memória física: `len()` slots, cada um vazio ou com uma página.
///
/// Uma página nunca aparece em dois slots ao mesmo tempo. Quem garante isso são
/// as políticas (só colocam página que não está na tabela), aqui só conferimos
/// em debug.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameTable {
    slots: Vec<Option<Page>>,
}

impl FrameTable {
    pub fn new(frame_count: usize) -> Result<Self> {
        if frame_count == 0 {
            return Err(SimError::FrameCountInvalid(0));
        }

        Ok(FrameTable {
            slots: vec![None; frame_count],
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Option<Page> {
        self.slots[index]
    }

    pub fn contains(&self, page: Page) -> bool {
        self.slot_of(page).is_some()
    }

    /// Menor índice vazio, se houver.
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn slot_of(&self, page: Page) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(page))
    }

    /// Sobrescreve o slot `index` com `page` e devolve o que estava lá antes.
    pub fn place(&mut self, index: usize, page: Page) -> Option<Page> {
        debug_assert!(
            self.slot_of(page).map_or(true, |existing| existing == index),
            "página {} já está no slot {:?}",
            page,
            self.slot_of(page)
        );

        self.slots[index].replace(page)
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Page>> + '_ {
        self.slots.iter().copied()
    }

    /// Só os slots ocupados, em ordem de índice.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, Page)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|page| (idx, page)))
    }

    pub fn is_full(&self) -> bool {
        self.first_empty_slot().is_none()
    }
}
