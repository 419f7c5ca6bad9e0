//! Checked Access Demonstration
//!
//! The plain lane and memory operations follow array and pointer rules. The
//! `try_*` methods report the same preconditions as `SimdError` values instead.

use lanewise::prelude::*;

fn lookup(table: &[i32], indices: [usize; 4]) -> Result<I32x4, SimdError> {
    let gathered = I32x4::try_gather(table, &indices)?;
    Ok(gathered.mul_scalar(10))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔧 Checked Vector Access\n");

    // Example 1: Loading from a slice
    let samples = [1.0f64, 2.0, 3.0, 4.0, 5.0];
    let v = F64x4::try_from_slice(&samples)?;
    println!("✅ Loaded:          {}", v);

    match F64x4::try_from_slice(&samples[2..]) {
        Ok(v) => println!("   Unexpected load: {}", v),
        Err(e) => println!("❌ Short slice:     {}", e),
    }

    // Example 2: Lane access
    match v.try_extract(7) {
        Ok(x) => println!("   Lane 7 = {}", x),
        Err(e) => println!("❌ Bad lane:        {}", e),
    }

    // Example 3: Gather through a bounds-checked index list
    let table = [3, 1, 4, 1, 5, 9, 2, 6];
    println!("✅ Gathered:        {}", lookup(&table, [7, 5, 3, 1])?);
    if let Err(e) = lookup(&table, [0, 1, 2, 8]) {
        println!("❌ Bad index:       {}", e);
    }

    // Example 4: Division that reports a zero divisor
    let a = I32x4::from_array([100, 200, 300, 400]);
    let b = I32x4::from_array([10, 0, 30, 40]);
    match a.try_div(&b) {
        Ok(q) => println!("   Quotient: {}", q),
        Err(e) => println!("❌ Division:        {}", e),
    }
    let skip_zero = b.cmpne_scalar(0);
    println!("✅ Masked quotient: {}", a.try_div_masked(&skip_zero, &b)?);

    // Example 5: Slice operations report mismatched lengths
    let left = vec![1u32; 16];
    let right = vec![2u32; 15];
    if let Err(e) = left.simd_add(&right) {
        println!("❌ Slice add:       {}", e);
    }
    println!("✅ Dot product:     {}", left.simd_dot(&left)?);

    Ok(())
}
