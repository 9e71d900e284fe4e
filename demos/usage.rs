use primekit::*;

fn main() {
    println!("A simple example!");

    let problem: Problem = "4: Min(4, 8, 10, 11, 12, 15)".parse().unwrap();
    let primes = problem.solve().unwrap();

    println!("Prime implicants of {:?}:", &problem.minterms);
    print!("{}", &primes);
}
