//! Static fallback content
//!
//! Served when the content source is unconfigured, unreachable or empty.
//! Timestamps are stamped at construction.

use shared::models::{
    AmbianceImage, ContactInfo, ContactType, Location, MenuCategory, MenuItem, OperatingHours,
    ServicePeriod, Testimonial,
};
use shared::util::now_rfc3339;

fn item(id: &str, name: &str, description: &str, price: f64, category: &str) -> MenuItem {
    let now = now_rfc3339();
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        is_available: true,
        image: None,
        tags: Vec::new(),
        is_signature: false,
        is_latest: false,
        created_at: now.clone(),
        updated_at: now,
    }
}

fn signature(mut item: MenuItem) -> MenuItem {
    item.is_signature = true;
    item
}

fn latest(mut item: MenuItem) -> MenuItem {
    item.is_latest = true;
    item
}

fn category(id: &str, name: &str, icon: &str, display_order: i32, items: Vec<MenuItem>) -> MenuCategory {
    let now = now_rfc3339();
    MenuCategory {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        icon: icon.to_string(),
        display_order,
        is_active: true,
        items,
        created_at: now.clone(),
        updated_at: now,
    }
}

/// Four categories of four items each
pub fn menu() -> Vec<MenuCategory> {
    vec![
        category(
            "appetizers",
            "Appetizers",
            "Utensils",
            1,
            vec![
                signature(item(
                    "paneer-tikka",
                    "Paneer Tikka",
                    "Marinated cottage cheese cubes grilled to perfection with aromatic spices",
                    180.0,
                    "appetizers",
                )),
                item(
                    "samosa-chat",
                    "Samosa Chat",
                    "Crispy samosas topped with tangy chutneys and fresh herbs",
                    120.0,
                    "appetizers",
                ),
                item(
                    "veg-spring-rolls",
                    "Vegetable Spring Rolls",
                    "Crispy rolls filled with fresh vegetables and served with sweet chili sauce",
                    150.0,
                    "appetizers",
                ),
                item(
                    "mushroom-65",
                    "Mushroom 65",
                    "Spicy and tangy mushroom preparation, a South Indian favorite",
                    170.0,
                    "appetizers",
                ),
            ],
        ),
        category(
            "main-courses",
            "Main Courses",
            "Heart",
            2,
            vec![
                signature(item(
                    "paneer-butter-masala",
                    "Paneer Butter Masala",
                    "Rich and creamy tomato-based curry with soft cottage cheese",
                    220.0,
                    "main-courses",
                )),
                item(
                    "dal-tadka",
                    "Dal Tadka",
                    "Traditional lentil curry tempered with aromatic spices",
                    160.0,
                    "main-courses",
                ),
                signature(item(
                    "veg-biryani",
                    "Vegetable Biryani",
                    "Fragrant basmati rice cooked with mixed vegetables and spices",
                    280.0,
                    "main-courses",
                )),
                item(
                    "chole-bhature",
                    "Chole Bhature",
                    "Spicy chickpeas served with fluffy deep-fried bread",
                    200.0,
                    "main-courses",
                ),
            ],
        ),
        category(
            "desserts",
            "Desserts",
            "Sparkles",
            3,
            vec![
                item(
                    "gulab-jamun",
                    "Gulab Jamun",
                    "Soft milk dumplings soaked in cardamom-flavored sugar syrup",
                    80.0,
                    "desserts",
                ),
                item(
                    "ras-malai",
                    "Ras Malai",
                    "Delicate cottage cheese dumplings in saffron milk",
                    100.0,
                    "desserts",
                ),
                item(
                    "kulfi",
                    "Kulfi",
                    "Traditional Indian ice cream with cardamom and pistachios",
                    90.0,
                    "desserts",
                ),
                item(
                    "payasam",
                    "Payasam",
                    "South Indian rice pudding with jaggery and coconut",
                    85.0,
                    "desserts",
                ),
            ],
        ),
        category(
            "beverages",
            "Beverages",
            "Coffee",
            4,
            vec![
                item(
                    "masala-chai",
                    "Masala Chai",
                    "Traditional spiced tea with aromatic herbs and spices",
                    40.0,
                    "beverages",
                ),
                item(
                    "fresh-lime-soda",
                    "Fresh Lime Soda",
                    "Refreshing lime drink with soda and mint",
                    60.0,
                    "beverages",
                ),
                item(
                    "mango-lassi",
                    "Mango Lassi",
                    "Creamy yogurt drink blended with sweet mango",
                    80.0,
                    "beverages",
                ),
                latest(item(
                    "filter-coffee",
                    "Filter Coffee",
                    "Authentic South Indian coffee brewed with chicory",
                    50.0,
                    "beverages",
                )),
            ],
        ),
    ]
}

fn ambiance_image(id: &str, title: &str, description: &str, photo: &str, kind: &str) -> AmbianceImage {
    let now = now_rfc3339();
    AmbianceImage {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        image: format!(
            "https://images.unsplash.com/{}?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
            photo
        ),
        kind: kind.to_string(),
        display_order: 1,
        is_active: true,
        created_at: now.clone(),
        updated_at: now,
    }
}

/// One image per ambiance type
pub fn ambiance() -> Vec<AmbianceImage> {
    vec![
        ambiance_image(
            "entrance-1",
            "Welcoming Entrance",
            "Warm hospitality awaits",
            "photo-1414235077428-338989a2e8c0",
            "entrance",
        ),
        ambiance_image(
            "dining-1",
            "Dining Area",
            "Comfortable family seating",
            "photo-1530062845289-9109b2c9c868",
            "dining",
        ),
        ambiance_image(
            "kitchen-1",
            "Modern Kitchen",
            "Hygienic food preparation",
            "photo-1571019613454-1cb2f99b2d8b",
            "kitchen",
        ),
        ambiance_image(
            "private-1",
            "Private Dining",
            "Special occasions",
            "photo-1551218808-94e220e084d2",
            "private",
        ),
    ]
}

fn period(start: &str, end: &str, label: &str) -> ServicePeriod {
    ServicePeriod {
        start: start.to_string(),
        end: end.to_string(),
        label: label.to_string(),
    }
}

fn hours(breaks: Vec<ServicePeriod>) -> Option<OperatingHours> {
    Some(OperatingHours {
        open: "07:00".to_string(),
        close: "22:00".to_string(),
        breaks,
    })
}

struct LocationSeed<'a> {
    id: &'a str,
    name: &'a str,
    address: &'a str,
    area: &'a str,
    phone: &'a str,
    email: &'a str,
    services: &'a [&'a str],
    description: &'a str,
    display_order: i32,
    operating_hours: Option<OperatingHours>,
}

impl LocationSeed<'_> {
    fn build(self) -> Location {
        let now = now_rfc3339();
        Location {
            id: self.id.to_string(),
            name: self.name.to_string(),
            address: self.address.to_string(),
            area: self.area.to_string(),
            phone: self.phone.to_string(),
            email: Some(self.email.to_string()),
            services: self.services.iter().map(|s| s.to_string()).collect(),
            description: Some(self.description.to_string()),
            coordinates: None,
            image: None,
            display_order: self.display_order,
            is_active: true,
            operating_hours: self.operating_hours,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// The four branches, in display order
pub fn locations() -> Vec<Location> {
    vec![
        LocationSeed {
            id: "walajapet",
            name: "Walajapet Highway",
            address: "1/220 Chennai Bangalore Hwy",
            area: "Walaja, Nandiyalam, Ratnagiri Kilminnal",
            phone: "+91 94432 26795",
            email: "walajapet@alankarhotels.com",
            services: &["Dine-in", "Parking", "Takeout"],
            description: "Our flagship location on the Chennai-Bangalore highway, perfect for travelers.",
            display_order: 1,
            operating_hours: hours(vec![
                period("11:00", "16:00", "Lunch"),
                period("18:00", "22:00", "Dinner"),
            ]),
        }
        .build(),
        LocationSeed {
            id: "ratnagiri-temple",
            name: "Ratnagiri Temple",
            address: "Bangalore-Chennai Hwy",
            area: "Near Ratnagiri Murugan Temple, Kilminnal",
            phone: "+91 74012 34500",
            email: "ratnagiri@alankarhotels.com",
            services: &["Dine-in", "Self-service"],
            description: "Conveniently located near the famous Ratnagiri Murugan Temple.",
            display_order: 2,
            operating_hours: hours(Vec::new()),
        }
        .build(),
        LocationSeed {
            id: "ratnagiri-highway",
            name: "Ratnagiri Highway",
            address: "Ratnagiri Highway",
            area: "Ratnagiri Kilminnal",
            phone: "+91 99444 46344",
            email: "highway@alankarhotels.com",
            services: &["Dine-in", "Highway location"],
            description: "Strategic highway location for quick stops and quality meals.",
            display_order: 3,
            operating_hours: hours(Vec::new()),
        }
        .build(),
        LocationSeed {
            id: "thottapalayam",
            name: "Thottapalayam Vellore",
            address: "New Bus Stand, Ward 59",
            area: "Thottapalayam, Vellore",
            phone: "+91 416 420 2013",
            email: "vellore@alankarhotels.com",
            services: &["Dine-in", "Delivery"],
            description: "Our city center location with delivery services within Vellore.",
            display_order: 4,
            operating_hours: hours(vec![
                period("07:00", "11:00", "Breakfast"),
                period("11:00", "16:00", "Lunch"),
                period("18:00", "22:00", "Dinner"),
            ]),
        }
        .build(),
    ]
}

#[allow(clippy::too_many_arguments)]
fn testimonial(
    id: &str,
    customer_name: &str,
    customer_title: &str,
    rating: u8,
    comment: &str,
    location: &str,
    date: &str,
    is_featured: bool,
    display_order: i32,
) -> Testimonial {
    let now = now_rfc3339();
    Testimonial {
        id: id.to_string(),
        customer_name: customer_name.to_string(),
        customer_title: Some(customer_title.to_string()),
        rating,
        comment: comment.to_string(),
        location: Some(location.to_string()),
        date: date.to_string(),
        is_active: true,
        is_featured,
        avatar: None,
        display_order,
        created_at: now.clone(),
        updated_at: now,
    }
}

/// Four reviews, the first three featured
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "testimonial-1",
            "Priya Sharma",
            "Regular Customer",
            5,
            "Outstanding vegetarian food with authentic flavors. The paneer butter masala is absolutely divine. Highly recommend the Walajapet location for highway travelers.",
            "Walajapet Highway",
            "2024-12-15",
            true,
            1,
        ),
        testimonial(
            "testimonial-2",
            "Rajesh Kumar",
            "Family Diner",
            5,
            "Clean, hygienic environment with excellent service. The variety in their menu is impressive and everything tastes homemade. Perfect for family dining.",
            "Thottapalayam Vellore",
            "2024-12-10",
            true,
            2,
        ),
        testimonial(
            "testimonial-3",
            "Meera Iyer",
            "Loyal Customer",
            5,
            "Been visiting for years and the quality never disappoints. The temple location is especially convenient and the self-service option is great for quick meals.",
            "Ratnagiri Temple",
            "2024-12-05",
            true,
            3,
        ),
        testimonial(
            "testimonial-4",
            "Ankit Patel",
            "Business Traveler",
            4,
            "Great food quality and quick service. The location on the highway makes it perfect for travelers. Will definitely visit again.",
            "Ratnagiri Highway",
            "2024-12-01",
            false,
            4,
        ),
    ]
}

fn contact(id: &str, kind: ContactType, label: &str, value: &str, icon: &str, display_order: i32) -> ContactInfo {
    let now = now_rfc3339();
    ContactInfo {
        id: id.to_string(),
        kind,
        label: label.to_string(),
        value: value.to_string(),
        icon: Some(icon.to_string()),
        display_order,
        is_active: true,
        created_at: now.clone(),
        updated_at: now,
    }
}

/// Branch phones, two mailboxes and opening hours
pub fn contact_info() -> Vec<ContactInfo> {
    vec![
        contact("phone-walajapet", ContactType::Phone, "Walajapet", "+91 94432 26795", "Phone", 1),
        contact(
            "phone-ratnagiri-temple",
            ContactType::Phone,
            "Ratnagiri Temple",
            "+91 74012 34500",
            "Phone",
            2,
        ),
        contact(
            "phone-ratnagiri-highway",
            ContactType::Phone,
            "Ratnagiri Highway",
            "+91 99444 46344",
            "Phone",
            3,
        ),
        contact(
            "phone-thottapalayam",
            ContactType::Phone,
            "Thottapalayam",
            "+91 416 420 2013",
            "Phone",
            4,
        ),
        contact(
            "email-info",
            ContactType::Email,
            "General Inquiries",
            "info@alankarhotels.com",
            "Mail",
            5,
        ),
        contact(
            "email-reservations",
            ContactType::Email,
            "Reservations",
            "reservations@alankarhotels.com",
            "Mail",
            6,
        ),
        contact(
            "hours-daily",
            ContactType::Hours,
            "Daily Operating Hours",
            "7:00 AM - 10:00 PM",
            "Clock",
            7,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_items_reference_their_category() {
        for category in menu() {
            assert_eq!(category.items.len(), 4);
            assert!(category.items.iter().all(|item| item.category == category.id));
        }
    }

    #[test]
    fn test_flags() {
        let items: Vec<_> = menu().into_iter().flat_map(|c| c.items).collect();
        let signature: Vec<_> = items.iter().filter(|i| i.is_signature).map(|i| i.id.as_str()).collect();
        let latest: Vec<_> = items.iter().filter(|i| i.is_latest).map(|i| i.id.as_str()).collect();

        assert_eq!(signature, ["paneer-tikka", "paneer-butter-masala", "veg-biryani"]);
        assert_eq!(latest, ["filter-coffee"]);
    }

    #[test]
    fn test_display_orders_ascend() {
        let orders: Vec<_> = locations().iter().map(|l| l.display_order).collect();
        assert_eq!(orders, [1, 2, 3, 4]);

        let orders: Vec<_> = contact_info().iter().map(|c| c.display_order).collect();
        assert_eq!(orders, [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_ratings_in_range() {
        assert!(testimonials().iter().all(|t| (1..=5).contains(&t.rating)));
        assert_eq!(testimonials().iter().filter(|t| t.is_featured).count(), 3);
    }
}
