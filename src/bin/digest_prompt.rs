//! Interactive prompt that reads one message per line from standard input and prints its MD5
//! and SHA1 digests, until the user declines continuation or the input ends.

use std::io::{self, BufRead, Write};

use md_hashes::md5::MD5Hash;
use md_hashes::sha1::SHA1Hash;
use md_hashes::HashFunction;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter a message to be hashed: ");
        io::stdout().flush()?;

        let message = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        println!("MD5:  {}", MD5Hash::digest_message(message.as_bytes()).to_hex());
        println!("SHA1: {}", SHA1Hash::digest_message(message.as_bytes()).to_hex());

        loop {
            print!("Hash another message? (y/n) ");
            io::stdout().flush()?;

            match lines.next() {
                Some(line) => match line?.as_str() {
                    "y" => break,
                    "n" => return Ok(()),
                    _ => continue,
                },
                None => return Ok(()),
            }
        }
    }
}
