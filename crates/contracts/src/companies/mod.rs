pub mod public_document;
