pub mod tariff_reader;
