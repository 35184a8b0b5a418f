//! A Tour of Matrix Decompositions
//!
//! Demonstrates how one matrix type adapts to the scalar structure it is
//! built over: exact rationals, integers, polynomials and floating point.
//!
//! Run with: cargo run --example spectral_tour

use sylvester::prelude::*;
use sylvester_linalg::Result;

fn q(rows: &[&[i64]]) -> Result<DenseMatrix<Q>> {
    DenseMatrix::from_rows(
        rows.iter()
            .map(|r| r.iter().map(|&v| Q::from_integer(v)).collect())
            .collect(),
    )
}

fn z(rows: &[&[i64]]) -> Result<DenseMatrix<Z>> {
    DenseMatrix::from_rows(
        rows.iter()
            .map(|r| r.iter().map(|&v| Z::new(v)).collect())
            .collect(),
    )
}

fn main() -> Result<()> {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Sylvester: matrix decompositions over abstract structures");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    example_1_exact_reduction()?;
    example_2_smith_normal_form()?;
    example_3_canonical_forms()?;
    example_4_floating_point()?;
    Ok(())
}

/// Example 1: Row reduction and solving over Q
fn example_1_exact_reduction() -> Result<()> {
    println!("Example 1: Exact reduction over Q\n");

    let a = q(&[&[1, 2, 1], &[2, 4, 0], &[3, 6, 1]])?;
    let red = a.rref()?;
    println!("  A          = {a}");
    println!("  rref(A)    = {}", red.matrix);
    println!("  rank       = {}", red.rank);
    println!("  pivots     = {:?}", red.pivot_columns);
    println!("  operations = {}", red.operations.len());

    let b = DenseMatrix::column_vector(vec![Q::from_integer(2), Q::from_integer(2), Q::from_integer(4)]);
    match a.solve_system(&b)? {
        Some(sol) => {
            println!("  A x = b has solution {}", sol.particular);
            for v in &sol.null_space {
                println!("    plus any multiple of {v}");
            }
        }
        None => println!("  A x = b is inconsistent"),
    }
    println!();
    Ok(())
}

/// Example 2: Smith Normal Form over Z
fn example_2_smith_normal_form() -> Result<()> {
    println!("Example 2: Smith Normal Form over Z\n");

    let a = z(&[&[2, 4, 4], &[-6, 6, 12], &[10, -4, -16]])?;
    let snf = a.smith_normal_form()?;
    let factors: Vec<String> = snf.invariant_factors.iter().map(ToString::to_string).collect();
    println!("  A                 = {a}");
    println!("  D = U A V         = {}", snf.diagonal);
    println!("  invariant factors = [{}]", factors.join(", "));
    println!("  U                 = {}", snf.left_transform);
    println!("  V                 = {}", snf.right_transform);
    println!();
    Ok(())
}

/// Example 3: Characteristic data and canonical forms over Q
fn example_3_canonical_forms() -> Result<()> {
    println!("Example 3: Canonical forms over Q\n");

    let a = q(&[&[2, 1, 0], &[0, 2, 0], &[0, 0, 3]])?;
    println!("  A                   = {a}");
    println!("  characteristic poly = {}", a.characteristic_polynomial()?);
    println!("  minimal poly        = {}", a.minimal_polynomial()?);

    let eigenvalues = [Q::from_integer(2), Q::from_integer(3)];
    if let Some(jf) = a.jordan_normal_form_with(&eigenvalues)? {
        println!("  Jordan form         = {}", jf.jordan);
        for (value, size) in &jf.blocks {
            println!("    block J{size}({value})");
        }
    }

    let rcf = a.rational_canonical_form()?;
    println!("  rational form       = {}", rcf.form);
    println!();
    Ok(())
}

/// Example 4: Eigenvalues of floating point matrices
fn example_4_floating_point() -> Result<()> {
    println!("Example 4: Floating point spectra\n");

    let fib = DenseMatrix::from_rows(vec![vec![R64(1.0), R64(1.0)], vec![R64(1.0), R64(0.0)]])?;
    println!("  Fibonacci matrix eigenvalues: {:?}", fib.eigenvalues()?);

    let rotation = DenseMatrix::from_rows(vec![
        vec![C64::from(0.0), C64::from(-1.0)],
        vec![C64::from(1.0), C64::from(0.0)],
    ])?;
    let values: Vec<String> = rotation.eigenvalues()?.iter().map(ToString::to_string).collect();
    println!("  rotation eigenvalues over C64: [{}]", values.join(", "));

    if let Some(eig) = rotation.eigendecomposition()? {
        println!("  eigenvectors = {}", eig.eigenvectors);
    }

    if let Some(power) = fib.pow_diagonalized(10)? {
        println!("  Fibonacci matrix to the 10th = {power}");
    }

    let basis = DenseMatrix::from_rows(vec![vec![R64(3.0), R64(1.0)], vec![R64(4.0), R64(2.0)]])?;
    println!("  Gram–Schmidt of {basis} = {}", basis.gram_schmidt()?);
    Ok(())
}
