pub mod public_documents;
