use csv_to_json_rs::helpers::{
    calculate_area, capitalize_first_letter, create_user, find_by_id, first_element,
    status_color, trim_and_format, Shape, Status,
};

fn main() {
    let users = vec![
        create_user(1, "Ivan Ivanov", Some("ivan@example.com"), None),
        create_user(2, "Petr Petrov", None, Some(false)),
    ];

    println!("First user: {:?}", first_element(&users));
    println!("User 2: {:?}", find_by_id(&users, 2));
    println!("User 999: {:?}", find_by_id(&users, 999));

    println!("Circle area (r = 5): {:.2}", calculate_area(Shape::Circle, 5.0));
    println!("Square area (side = 4): {}", calculate_area(Shape::Square, 4.0));

    for status in [Status::Active, Status::New, Status::Inactive] {
        println!("{:?} -> {}", status, status_color(status));
    }

    println!("{}", capitalize_first_letter("hello world", false));
    println!("{}", trim_and_format("  hello world  ", true));
}
