/// n! over `u64`, wrapping on overflow. Zero stays zero, so stop there (n >= 66).
pub fn factorial(n: u64) -> u64 {
    let mut acc: u64 = 1;
    for i in 2..=n {
        acc = acc.wrapping_mul(i);
        if acc == 0 {
            break;
        }
    }
    acc
}
