use rand::Rng;
use spinlab_execution::RoundStream;
use std::{io::Write, thread, time::Duration};

/// Print the first `count` rounds of a stream one at a time.
///
/// Purely cosmetic: the stream is consumed lazily and `delay` is slept
/// between lines. Returns the number of rounds written.
pub fn replay<R, W>(
    stream: RoundStream<'_, R>,
    count: usize,
    delay: Duration,
    out: &mut W,
) -> std::io::Result<usize>
where
    R: Rng + ?Sized,
    W: Write,
{
    let mut written = 0;
    for entry in stream.take(count) {
        if written > 0 && !delay.is_zero() {
            thread::sleep(delay);
        }
        writeln!(
            out,
            "round {:>6}: {:>5} {:<5} {:>+12.2}  balance {:>12.2}",
            entry.round,
            entry.label.to_string(),
            entry.color.as_str(),
            entry.delta,
            entry.balance
        )?;
        out.flush()?;
        written += 1;
    }
    Ok(written)
}
