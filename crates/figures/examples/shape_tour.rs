//! Walk through construction, rejection, mutation and transfer.
//!
//! Usage:
//!   cargo run -p figures --example shape_tour

use figures::prelude::*;

fn main() {
    let inputs = [
        (ShapeKind::Trapezoid, "0 0 4 0 3 2 1 2"),
        (ShapeKind::Trapezoid, "0 0 2 0 2 2 0 2"),
        (ShapeKind::Rhombus, "0 2 2 0 0 -2 -2 0"),
        (ShapeKind::Rhombus, "0 0 3 0 3 2 0 2"),
        (ShapeKind::Pentagon, "0 2 2 1 1 -1 -1 -1 -2 1"),
        (ShapeKind::Pentagon, "0 0 3 0 3 3 1 1 0 3"),
    ];
    let mut list = ShapeList::new();
    for (kind, text) in inputs {
        match Shape::parse(kind, text) {
            Ok(shape) => {
                println!("ok   {shape}");
                list.push(shape);
            }
            Err(e) => println!("fail {e}"),
        }
    }
    println!("total area: {:?}", list.total_area());

    let mut copy = list.duplicate(0).expect("first shape");
    copy.set_vertex(2, Point::new(3.5, 2.0)).expect("index in range");
    println!("after unchecked write: area = {:?}", copy.area());
    println!("revalidate: {:?}", copy.revalidate());
    println!("area = {:?}, equals original: {}", copy.area(), Some(&copy) == list.get(0));

    println!("transfer 0 -> 1: {:?}", list.transfer(0, 1));
    println!("slot 0 now: {}", list.get(0).expect("slot 0"));
}
