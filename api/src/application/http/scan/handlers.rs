pub mod scan_barcode;
