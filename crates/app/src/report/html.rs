//! HTML reports
//!
//! String-assembled HTML in the shape the store's printed reports have
//! always used: flex rows of item cards with inline barcode images.

use std::fmt::Write as _;

use bodega::{
    basket::Basket,
    catalog::{CatalogItem, Category},
};
use rusty_money::{Money, iso::Currency};

fn title(category: Category) -> &'static str {
    match category {
        Category::Otc => "OTC",
        Category::Food => "Food",
    }
}

fn item_card(html: &mut String, item: &CatalogItem<'_>, category: Category, basis: &str, padding: &str) {
    _ = write!(
        html,
        "<div style='flex-basis: {basis}; padding: {padding};'><h2>{}</h2>",
        item.name()
    );

    // Taxable items show the shelf price, a tax marker, and the price paid.
    if item.taxable() {
        _ = write!(
            html,
            "<h3>Price: {} * => ( {} )</h3>",
            item.price(),
            item.full_price()
        );
    } else {
        _ = write!(html, "<h3>Price: {}</h3>", item.full_price());
    }

    _ = write!(
        html,
        "<img src='images/{category}/{}.png'></div>",
        item.sku()
    );
}

/// Render a selected basket as the transaction report page.
///
/// Items flow two per row; every other row is shaded. The final-total line
/// is the target minus the remainder, to the cent.
pub(crate) fn transaction_report(
    category: Category,
    target: Money<'_, Currency>,
    basket: &Basket<'_>,
) -> String {
    let mut html = String::new();

    _ = write!(html, "<html><head><title>{category} Items List</title></head><body>");
    _ = write!(html, "<h1 style=font-size:50px>{} Items List</h1>", title(category));
    _ = write!(html, "<h2 style=font-size:35px>Target total: {target}</h2>");

    let count = basket.len();

    for (index, item) in basket.iter().enumerate() {
        if index % 2 == 0 {
            if index % 4 >= 2 {
                html.push_str(
                    "<div style='display: flex; flex-wrap: wrap; background-color:#ededed;'>",
                );
            } else {
                html.push_str("<div style='display: flex; flex-wrap: wrap;'>");
            }
        }

        item_card(&mut html, item, category, "45%", "5px");

        if (index + 1) % 2 == 0 || index + 1 == count {
            html.push_str("</div>");
        }
    }

    _ = write!(
        html,
        "<h2 style='font-size:35px'>Final total: {}</h2>",
        basket.total()
    );
    html.push_str("</body></html>");

    html
}

/// Render every item of a category as the master list page, three per row,
/// with a trailing item count.
pub(crate) fn master_list(category: Category, items: &[CatalogItem<'_>]) -> String {
    let mut html = String::new();

    _ = write!(html, "<html><head><title>{category} Master List</title></head><body>");
    _ = write!(html, "<h1 style=font-size:50px>{} Master List</h1>", title(category));

    let count = items.len();

    for (index, item) in items.iter().enumerate() {
        if index % 3 == 0 {
            html.push_str("<div style='display: flex; flex-wrap: wrap;'>");
        }

        item_card(&mut html, item, category, "30%", "20px");

        if (index + 1) % 3 == 0 || index + 1 == count {
            html.push_str("</div>");
        }
    }

    _ = write!(html, "<h3>Total Items: {count}</h3>");
    html.push_str("</body></html>");

    html
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;

    fn items() -> Vec<CatalogItem<'static>> {
        vec![
            CatalogItem::new("Sparkling Water 1L", "012000161155", Money::from_minor(100, USD), true)
                .expect("item should build"),
            CatalogItem::new("Whole Milk Quart", "041900045203", Money::from_minor(189, USD), false)
                .expect("item should build"),
            CatalogItem::new("White Bread Loaf", "072250007645", Money::from_minor(249, USD), false)
                .expect("item should build"),
            CatalogItem::new("Chocolate Bar", "034000002405", Money::from_minor(159, USD), true)
                .expect("item should build"),
        ]
    }

    #[test]
    fn transaction_report_shows_target_and_final_total() {
        let basket = Basket::new(items(), Money::from_minor(44, USD));
        let html = transaction_report(Category::Food, Money::from_minor(2500, USD), &basket);

        assert!(html.contains("Food Items List"));
        assert!(html.contains("Target total: $25.00"));
        // 109 + 189 + 249 + 173 = 720
        assert!(html.contains("Final total: $7.20"));
    }

    #[test]
    fn transaction_report_marks_taxable_items() {
        let basket = Basket::new(items(), Money::from_minor(0, USD));
        let html = transaction_report(Category::Food, Money::from_minor(720, USD), &basket);

        assert!(html.contains("Price: $1.00 * => ( $1.09 )"));
        assert!(html.contains("Price: $1.89"));
    }

    #[test]
    fn transaction_report_shades_every_other_row() {
        let basket = Basket::new(items(), Money::from_minor(0, USD));
        let html = transaction_report(Category::Food, Money::from_minor(720, USD), &basket);

        // Four items make two rows; the second row is the shaded one.
        assert_eq!(html.matches("background-color:#ededed").count(), 1);
    }

    #[test]
    fn transaction_report_links_barcode_images() {
        let basket = Basket::new(items(), Money::from_minor(0, USD));
        let html = transaction_report(Category::Food, Money::from_minor(720, USD), &basket);

        assert!(html.contains("images/food/012000161155.png"));
    }

    #[test]
    fn empty_basket_report_has_no_rows() {
        let basket = Basket::new(Vec::new(), Money::from_minor(200, USD));
        let html = transaction_report(Category::Otc, Money::from_minor(200, USD), &basket);

        assert!(html.contains("Final total: $0.00"));
        assert!(!html.contains("display: flex"));
    }

    #[test]
    fn master_list_counts_items() -> TestResult {
        let items = items();
        let html = master_list(Category::Food, &items);

        assert!(html.contains("Food Master List"));
        assert!(html.contains("Total Items: 4"));
        assert_eq!(html.matches("<div style='display: flex; flex-wrap: wrap;'>").count(), 2);

        Ok(())
    }
}
