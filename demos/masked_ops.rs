//! Masked Operations Demonstration
//!
//! Builds masks from comparisons and uses them to clamp, select and reduce
//! a subset of lanes without branching.

use lanewise::prelude::*;

fn main() {
    println!("🎭 Masked Vector Operations\n");

    let readings = F32x8::from_array([12.5, -3.0, 48.0, 7.25, -0.5, 101.0, 33.0, 0.0]);
    println!("   Readings:        {}", readings);

    // Example 1: Clamp negative lanes to zero
    let negative = readings.cmplt_scalar(0.0);
    let clamped = readings.blend_scalar(&negative, 0.0);
    println!("   Negative lanes:  {}", negative);
    println!("   Clamped:         {}", clamped);

    // Example 2: Scale only the lanes above a threshold
    let high = readings.cmpgt_scalar(40.0);
    let scaled = readings.mul_scalar_masked(&high, 0.5);
    println!("   Halved if > 40:  {}", scaled);

    // Example 3: Reduce over the active lanes only
    let valid = negative.lnot();
    println!(
        "   Sum of valid:    {} over {} lanes",
        readings.hadd_masked(&valid),
        valid.count()
    );
    match readings.imax_masked(&valid) {
        Some(lane) => println!("   Largest valid:   lane {} = {}", lane, readings.extract(lane)),
        None => println!("   No valid lanes"),
    }

    // Example 4: Empty masks leave every lane alone and reduce to the identity
    let none = Mask::splat(false);
    assert_eq!(readings.sqrt_masked(&none), readings);
    println!("   Empty-mask max:  {}", readings.hmax_masked(&none));

    // Example 5: Integer lanes saturate instead of wrapping when asked to
    let counters = U8x8::from_array([250, 10, 255, 0, 128, 200, 5, 99]);
    let bump = U8x8::splat(10);
    println!("\n   Wrapping add:    {}", counters + bump);
    println!("   Saturating add:  {}", counters.sadd(&bump));
    println!(
        "   Bumped below 200: {}",
        counters.sadd_masked(&counters.cmplt_scalar(200), &bump)
    );

    // Example 6: Rearrange lanes with a swizzle
    let reversed = readings.swizzle(&Swizzle::reverse());
    println!("\n   Reversed:        {}", reversed);
}
