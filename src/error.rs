use crate::domain::money::Price;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CounterError>;

#[derive(Error, Debug)]
pub enum CounterError {
    #[error("format harga tidak valid: {0:?}")]
    InvalidFormat(String),
    #[error("harga tidak dapat diproses: {0}")]
    ParseFailure(#[from] rust_decimal::Error),
    #[error("jumlah pesanan tidak valid")]
    InvalidQuantity,
    #[error("jumlah biaya terlalu besar untuk diproses")]
    AmountOverflow,
    #[error("uang yang dibayarkan tidak mencukupi (total {total}, dibayar {paid})")]
    InsufficientPayment { total: Price, paid: Price },
    #[error("Input tidak valid!")]
    InvalidPaymentInput,
    #[error("Item tidak ada dalam daftar menu: {0}")]
    UnknownMenuCode(String),
    #[error("kode menu ganda: {0}")]
    DuplicateMenuCode(String),
    #[error("daftar menu kosong")]
    EmptyMenu,
    #[error("ringkasan pesanan tidak valid: {0}")]
    InvalidSummary(String),
    #[error("antrian pesanan sudah ditutup")]
    QueueClosed,
    #[error("worker pesanan gagal: {0}")]
    WorkerFailed(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
