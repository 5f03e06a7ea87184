mod pytori;

pub use pytori::PytoriError;
