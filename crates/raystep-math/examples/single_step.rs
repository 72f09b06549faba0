use raystep_math::*;

fn main() {
    let source = Vector2::new(3.4, 3.4);
    let targets = [
        Vector2::new(5.2, 5.2),
        Vector2::new(4.5, 2.2),
        Vector2::new(1.5, 7.5),
        Vector2::new(3.4, 8.6),
        Vector2::new(9.1, 3.4),
    ];

    println!("Source: {}", source);
    println!();

    for target in targets {
        let candidates = step_candidates(source, target);
        let exact = exact_step(source, target);
        let approx = approximate_step(source, target);

        println!("Target {}", target);
        match candidates.vertical_line {
            Some(a) => println!("  vertical line crossing:   {} (distance {:.3})", a, target.distance_to(a)),
            None => println!("  vertical line crossing:   none (vertical ray)"),
        }
        match candidates.horizontal_line {
            Some(b) => println!("  horizontal line crossing: {} (distance {:.3})", b, target.distance_to(b)),
            None => println!("  horizontal line crossing: none (horizontal ray)"),
        }
        println!("  next crossing:            {}", exact);
        println!("  one unit along the ray:   {}", approx);
        println!();
    }
}
