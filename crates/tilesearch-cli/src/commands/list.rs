/// Printing the heuristic and identity choices.
use super::*;

pub fn list_heuristics() {
    println!("{}", "Heuristics:".bold());
    for heuristic in Heuristic::ALL {
        println!("  {:4}{}", heuristic.alias(), heuristic.name());
    }
    println!("{}", "Identity schemes:".bold());
    for scheme in IdentityScheme::ALL {
        let marker = if scheme == IdentityScheme::default() {
            " (default)"
        } else {
            ""
        };
        println!("  {}{}", scheme.name(), marker);
    }
}
