//! Terminal output for framing results and house records.

use anyhow::Result;
use serde::Serialize;

use framing_core::framing::{HouseBreakdown, Wall};
use framing_core::HouseRecord;

const RULE: &str = "═══════════════════════════════════════";

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_requirements(result: &HouseBreakdown, breakdown: bool) {
    let dims = result.dimensions;

    println!("{}", RULE);
    println!("  WALL FRAMING TAKEOFF  {} ft x {} ft", dims.width_ft, dims.length_ft);
    println!("{}", RULE);

    if breakdown {
        println!();
        print_wall("Width walls (x2)", &result.width_wall);
        print_wall("Length walls (x2)", &result.length_wall);
        println!("Before waste:");
        println!("  Studs: {}", result.studs_before_waste);
        println!("  Posts: {} (incl. 4 corners)", result.posts_before_waste);
        println!();
    }

    println!("  Studs: {}", result.requirements.studs);
    println!("  Posts: {}", result.requirements.posts);
    println!("{}", RULE);
}

fn print_wall(title: &str, wall: &Wall) {
    println!("{}:", title);
    println!("  Span:          {:.1}\"", wall.length_in);
    println!("  Posts:         {}", wall.posts);
    println!("  Full sections: {}", wall.full_sections);
    println!("  Last section:  {:.1}\"", wall.last_section_in);
    println!("  Boards:        {} ({} studs + {} plates)", wall.boards, wall.studs, wall.plates);
    println!();
}

pub fn print_house_list(houses: &[&HouseRecord]) {
    if houses.is_empty() {
        println!("No houses stored.");
        return;
    }

    println!("{:<24} {:>10} {:>10}", "NAME", "WIDTH FT", "LENGTH FT");
    for house in houses {
        println!("{:<24} {:>10} {:>10}", house.name, house.width_ft, house.length_ft);
    }
}

pub fn print_house(record: &HouseRecord, result: &HouseBreakdown) {
    println!("{}", record.name);
    println!("  Created:  {}", record.created.format("%Y-%m-%d %H:%M"));
    println!("  Modified: {}", record.modified.format("%Y-%m-%d %H:%M"));
    println!();
    print_requirements(result, false);
}
