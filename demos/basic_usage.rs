//! Basic usage example for the polydiff library.
//!
//! This example builds a few functions on small groups, prints their value
//! tables, and queries the degree oracle.

use std::sync::Arc;

use num_bigint::BigInt;
use num_rational::BigRational;
use polydiff::catalogue::binomial_function;
use polydiff::{Degree, Group, PolynomialFunction};

fn main() {
    println!("Polydiff - Basic Usage Example\n");

    // A linear function on Z/4: f(x) = x/4 (mod 1).
    println!("Building f(x) = x/4 on Z/4...");
    let z4 = Arc::new(Group::cyclic(4).expect("modulus is positive"));
    let linear = PolynomialFunction::from_fn(Arc::clone(&z4), |g| {
        BigRational::new(BigInt::from(g.as_scalar().unwrap()), BigInt::from(4))
    });

    print!("{linear}");
    println!("  degree_leq(0): {}", linear.degree_leq(0));
    println!("  degree_leq(1): {}", linear.degree_leq(1));
    println!("  degree: {}", linear.degree(3));
    println!();

    // The difference operator reduces the degree by one.
    println!("First difference along shift 1:");
    let shift = polydiff::GroupElement::Scalar(1);
    let diff = linear.difference(&shift).expect("shift is a member");
    print!("{diff}");
    println!("  is_zero: {}", diff.is_zero());
    println!();

    // A bilinear function on Z/4 ⊕ Z/4: f(x, y) = xy/2 (mod 1).
    println!("Building f(x, y) = x*y/2 on Z/4 ⊕ Z/4...");
    let z44 = Arc::new(Group::direct_sum([4, 4]).expect("moduli are positive"));
    let bilinear = PolynomialFunction::from_fn(z44, |g| {
        let coords = g.as_tuple().unwrap();
        BigRational::new(
            BigInt::from(i64::from(coords[0]) * i64::from(coords[1])),
            BigInt::from(2),
        )
    });
    println!("  degree_leq(1): {}", bilinear.degree_leq(1));
    println!("  degree_leq(2): {}", bilinear.degree_leq(2));
    println!();

    // The binomial family from the catalogue.
    println!("Binomial family C(x, i)/4 on Z/4:");
    for index in 0..4 {
        let f = binomial_function(index).expect("index is non-negative");
        match f.degree(6) {
            Degree::Exact(d) => println!("  i = {index}: degree {d}"),
            Degree::ExceedsBound(bound) => {
                println!("  i = {index}: degree exceeds {bound}");
            }
        }
    }
}
