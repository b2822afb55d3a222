//! `bookgrab catalog` – list catalog entries.

use bookgrab_core::catalog::Catalog;

pub fn run_list_catalog(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("Catalog is empty.");
        return;
    }
    for (i, url) in catalog.iter().enumerate() {
        println!("{:>4}  {}", i + 1, url);
    }
    println!("{} entries", catalog.len());
}
