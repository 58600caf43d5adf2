use std::env;
use std::fs;
use std::io;

use prefix_codes::huffman_codes;
use prefix_codes::shannon_fano_codes;

fn main() -> io::Result<()> {
    env_logger::init();

    let path = env::args().nth(1).unwrap_or_else(|| "input.txt".to_string());
    let text = fs::read(&path)?;

    println!("Huffman Codes:");
    for (symbol, code) in huffman_codes(&text) {
        println!("{} {}", char::from(symbol).escape_default(), code);
    }

    println!();
    println!("Shannon-Fano Codes:");
    for (symbol, code) in shannon_fano_codes(&text) {
        println!("{} {}", char::from(symbol).escape_default(), code);
    }

    Ok(())
}
