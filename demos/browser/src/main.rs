//! Scripted CLI walkthrough of the shop list view.
//!
//! Drives the catalog store through a full browse session (initial load,
//! filtering, pagination, shop creation, clearing) against the mock
//! gateways, printing the state the presentational shell would render after
//! each step. Set `RUST_LOG=shopgrid_runtime=trace` to watch the effect
//! loop.

#![allow(clippy::print_stdout)]

use shopgrid_catalog::mocks::{MockCatalogGateway, MockCreationGateway};
use shopgrid_catalog::{
    CatalogAction, CatalogEnvironment, CatalogReducer, CatalogState, FilterKey, LoadPhase,
    NewShop, Product, Shop, ShopPage,
};
use shopgrid_core::environment::SystemClock;
use shopgrid_runtime::Store;
use std::sync::Arc;
use std::time::Duration;

type DemoStore = Store<
    CatalogState,
    CatalogAction,
    CatalogEnvironment<MockCatalogGateway, MockCreationGateway>,
    CatalogReducer<MockCatalogGateway, MockCreationGateway>,
>;

fn shop(id: &str, name: &str, product: &str, price: f64) -> Shop {
    Shop::new(
        id,
        name,
        vec![Product::new(product, price, vec![format!("{id}.jpg")])],
    )
}

async fn show(store: &DemoStore, heading: &str) {
    let state = store.state(Clone::clone).await;
    println!("\n--- {heading} ---");
    match state.phase() {
        LoadPhase::Loading => {
            println!("loading… ({} skeleton cards)", state.skeleton_slots());
        },
        LoadPhase::Errored => {
            println!(
                "error: {}",
                state.fetch.error.as_deref().unwrap_or("unknown")
            );
        },
        LoadPhase::Idle => println!("idle"),
        LoadPhase::Loaded => {},
    }
    if state.fetch.shops.is_empty() {
        println!("No Data Available.");
    }
    for shop in &state.fetch.shops {
        let product = shop.products.first();
        println!(
            "  {}: {}",
            shop.name,
            product.map_or("(no products)".to_string(), |p| format!(
                "{} @ Rp {}",
                p.name, p.price
            ))
        );
    }
    println!(
        "page {}/{} (size {})",
        state.pagination.current_page, state.pagination.total_pages, state.pagination.page_size
    );
}

async fn step(store: &DemoStore, action: CatalogAction) -> Result<(), shopgrid_runtime::StoreError> {
    let mut handle = store.send(action).await?;
    handle.wait_with_timeout(Duration::from_secs(5)).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Shopgrid Browser Demo ===");

    let gateway = MockCatalogGateway::with_page(ShopPage {
        shops: vec![
            shop("1", "Toko Abadi", "Avanza", 250_000.0),
            shop("2", "Toko Berkah", "Xenia", 220_000.0),
        ],
        total_pages: 3,
    });
    let creation = MockCreationGateway::new();
    let env = CatalogEnvironment::new(gateway.clone(), creation.clone(), Arc::new(SystemClock));
    let store = Store::new(CatalogState::new(), CatalogReducer::new(), env);

    // Mount: initial fetch with empty filters, page 1, default size
    step(&store, CatalogAction::Started).await?;
    show(&store, "initial load").await;

    // Edits are deferred; only submit fetches
    step(
        &store,
        CatalogAction::FilterEdited {
            key: FilterKey::ShopName,
            value: "Toko Abadi".into(),
        },
    )
    .await?;
    gateway.enqueue_ok(ShopPage {
        shops: vec![shop("1", "Toko Abadi", "Avanza", 250_000.0)],
        total_pages: 1,
    });
    step(&store, CatalogAction::FiltersSubmitted).await?;
    show(&store, "filtered by shop name").await;

    // Clear brings everything back
    step(&store, CatalogAction::FiltersCleared).await?;
    show(&store, "filters cleared").await;

    // Navigate to the second page
    gateway.enqueue_ok(ShopPage {
        shops: vec![shop("3", "Toko Cahaya", "Brio", 180_000.0)],
        total_pages: 3,
    });
    step(&store, CatalogAction::PageRequested { page: 2 }).await?;
    show(&store, "page 2").await;

    // Create a shop from the modal; the list refetches in place
    step(&store, CatalogAction::CreateModalOpened).await?;
    let draft = NewShop::new("Toko Baru", "admin@example.com");
    draft.validate()?;
    step(&store, CatalogAction::ShopCreationRequested { shop: draft }).await?;

    // The refetch cascades from the ShopCreated feedback; let it settle
    for _ in 0..100 {
        if !store.state(|s| s.fetch.loading || s.create_modal_open).await {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    show(&store, "after creating a shop (still on page 2)").await;
    println!("created shops: {}", creation.created().len());

    store.shutdown(Duration::from_secs(5)).await?;
    println!("\n=== Demo Complete ===");
    Ok(())
}
