use opendatahub::{OpenDataHub, OpenDataHubError, Representation};

#[tokio::main]
async fn main() -> Result<(), OpenDataHubError> {
    let client = OpenDataHub::new()?;

    let categories = client
        .categories()
        .representation(Representation::FlatNode)
        .origin("opendatahub-rs-demo")
        .call()
        .await?;
    println!("Station types: {categories}");

    let free_spots = client
        .latest_measurements()
        .station_types("ParkingStation")
        .data_types("free")
        .select("scode,sname,mvalue,mvalidtime")
        .limit(5)
        .timezone("Europe/Rome")
        .origin("opendatahub-rs-demo")
        .call()
        .await?;
    println!("{free_spots:#}");

    Ok(())
}
