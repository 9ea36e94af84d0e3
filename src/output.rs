use std::io::{self, Write};

use crate::kruskal::KruskalMst;

/// Formats `x` like a C++ output stream with default settings: six
/// significant digits, trailing zeros dropped, scientific notation when the
/// exponent is below -5 or at least 6.
pub fn format_weight(x: f64) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    // rounding to six digits first decides which notation applies
    let sci = format!("{:.5e}", x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -5 || exp >= 6 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (5 - exp) as usize;
        trim_zeros(&format!("{:.*}", decimals, x)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Total weight on the first line, then `a-b: w` per accepted edge.
pub fn write_plain<O: Write>(out: &mut O, mst: &KruskalMst<f64>) -> io::Result<()> {
    writeln!(out, "{}", format_weight(mst.total_weight()))?;
    for e in mst.edges() {
        writeln!(out, "{}-{}: {}", e.endpoint_a(), e.endpoint_b(), format_weight(e.weight()))?;
    }
    Ok(())
}
