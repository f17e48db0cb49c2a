use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

/// Tudo que pode dar errado antes de uma simulação começar.
///
/// Depois que a validação passa, os algoritmos são funções totais: nenhuma
/// dessas variantes aparece no meio de uma execução.
#[derive(Error, Debug)]
pub enum SimError {
    /// Zero (ou negativo) frames. O cursor circular do FIFO faz `% frame_count`,
    /// então isso precisa ser barrado antes de qualquer política rodar.
    #[error("número de frames inválido: {0} (precisa ser pelo menos 1)")]
    FrameCountInvalid(i64),

    #[error("número de frames inválido: {input:?} não é um inteiro")]
    InputFormat {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("intervalo de páginas inválido: precisa ser pelo menos 1")]
    RangeInvalid,

    #[error("página inválida na reference string: {0:?}")]
    InvalidPage(String),

    #[error("política desconhecida: {0:?} (use fifo, lru ou optimal)")]
    UnknownPolicy(String),

    #[error("erro de IO: {0}")]
    Io(#[from] std::io::Error),
}
