pub mod journal_writer;
