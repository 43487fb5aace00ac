//! QR Decomposition Demonstration
//!
//! Decomposes a fixed 15×10 integer matrix with classical Gram-Schmidt,
//! prints the Q and R factors, then projects a query vector onto the
//! column space of the matrix and onto its orthogonal complement.

use qr_engine::prelude::*;

fn main() {
    let a = Matrix::from_rows(&[
        vec![3.0, 6.0, 8.0, 0.0, 4.0, 3.0, 1.0, 5.0, 4.0, 4.0],
        vec![4.0, 0.0, 6.0, 5.0, 1.0, 9.0, 3.0, 3.0, 3.0, 3.0],
        vec![5.0, 0.0, 9.0, 8.0, 0.0, 4.0, 9.0, 6.0, 6.0, 4.0],
        vec![0.0, 7.0, 6.0, 9.0, 2.0, 5.0, 5.0, 5.0, 3.0, 4.0],
        vec![2.0, 3.0, 8.0, 1.0, 2.0, 2.0, 6.0, 6.0, 6.0, 4.0],
        vec![5.0, 4.0, 1.0, 8.0, 1.0, 5.0, 8.0, 9.0, 5.0, 3.0],
        vec![0.0, 1.0, 7.0, 5.0, 3.0, 7.0, 9.0, 4.0, 0.0, 7.0],
        vec![2.0, 9.0, 2.0, 8.0, 3.0, 4.0, 8.0, 2.0, 2.0, 5.0],
        vec![6.0, 6.0, 0.0, 0.0, 4.0, 6.0, 8.0, 2.0, 7.0, 1.0],
        vec![4.0, 7.0, 8.0, 6.0, 4.0, 8.0, 7.0, 8.0, 2.0, 7.0],
        vec![7.0, 5.0, 9.0, 9.0, 5.0, 1.0, 8.0, 4.0, 3.0, 8.0],
        vec![2.0, 4.0, 9.0, 2.0, 9.0, 4.0, 0.0, 7.0, 0.0, 8.0],
        vec![2.0, 8.0, 2.0, 4.0, 2.0, 4.0, 6.0, 3.0, 5.0, 1.0],
        vec![2.0, 9.0, 6.0, 8.0, 2.0, 5.0, 9.0, 0.0, 0.0, 9.0],
        vec![1.0, 4.0, 5.0, 2.0, 2.0, 2.0, 2.0, 6.0, 9.0, 5.0],
    ])
    .expect("rows are rectangular");

    let x = [
        21.0, 11.0, 9.0, 6.0, 5.0, 4.0, 2.0, 1.0, 94.0, 91.0, 89.0, 85.0, 84.0, 16.0, 98.0,
    ];

    let QrDecomposition { q, r } = qr(&a).expect("columns are linearly independent");

    println!("Q:\n{}", Rounded::new(&q, 2));
    println!("R:\n{}", Rounded::new(&r, 2));

    let onto_span = project_onto_column_space(&q, &x).expect("x has matching length");
    println!("Projection of x onto the column space S:");
    print_vector(&onto_span);

    let onto_complement = project_onto_complement(&q, &x).expect("x has matching length");
    println!("Projection of x onto the orthogonal complement of S:");
    print_vector(&onto_complement);
}

fn print_vector(v: &[f64]) {
    let entries: Vec<String> = v.iter().map(|x| format!("{x:.2}")).collect();
    println!("[{}]\n", entries.join(", "));
}
