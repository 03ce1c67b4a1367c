use chrono::NaiveDate;
use starwars_blog_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        characters::CreateCharacterRequest, planets::CreatePlanetRequest,
        users::CreateUserRequest, vehicles::CreateVehicleRequest,
    },
    error::{AppError, AppResult},
    services::{character_service, planet_service, user_service, vehicle_service},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;
    let state = AppState::new(orm);

    seed_user(&state).await?;
    seed_planets(&state).await?;
    seed_characters(&state).await?;
    seed_vehicles(&state).await?;

    println!("Seed completed");
    Ok(())
}

// Rows that already exist are reported and skipped.
fn skip_existing<T>(label: &str, result: AppResult<T>) -> anyhow::Result<()> {
    match result {
        Ok(_) => println!("Seeded {label}"),
        Err(AppError::Conflict(_)) => println!("Skipped {label} (already present)"),
        Err(err) => return Err(anyhow::anyhow!("seeding {label} failed: {err}")),
    }
    Ok(())
}

async fn seed_user(state: &AppState) -> anyhow::Result<()> {
    let suscription_date = NaiveDate::from_ymd_opt(2021, 9, 1)
        .ok_or_else(|| anyhow::anyhow!("invalid seed date"))?;
    let result = user_service::create_user(
        state,
        CreateUserRequest {
            username: "luke".into(),
            email: "luke@tatooine.example".into(),
            password: "usetheforce".into(),
            suscription_date,
        },
    )
    .await;
    skip_existing("user luke", result)
}

async fn seed_planets(state: &AppState) -> anyhow::Result<()> {
    let planets = vec![
        ("Tatooine", 200_000, "arid", "desert", 10_465, 23, 304, "1 standard", 1),
        ("Alderaan", 2_000_000_000, "temperate", "grasslands", 12_500, 24, 364, "1 standard", 40),
        ("Hoth", 0, "frozen", "tundra, ice caves", 7_200, 23, 549, "1.1 standard", 100),
    ];

    for planet in planets {
        let (name, population, climate, terrain, diameter, rotation, orbital, gravity, water) =
            planet;
        let result = planet_service::create_planet(
            state,
            CreatePlanetRequest {
                name: name.into(),
                population,
                climate: climate.into(),
                terrain: terrain.into(),
                diameter,
                rotation_period: rotation,
                orbital_period: orbital,
                gravity: gravity.into(),
                surface_water: water,
            },
        )
        .await;
        skip_existing(&format!("planet {name}"), result)?;
    }
    Ok(())
}

async fn seed_characters(state: &AppState) -> anyhow::Result<()> {
    let characters = vec![
        ("Luke Skywalker", 172, 77, "blond", 19, "Tatooine", "Human"),
        ("Leia Organa", 150, 49, "brown", 19, "Alderaan", "Human"),
        ("C-3PO", 167, 75, "n/a", 112, "Tatooine", "Droid"),
    ];

    for (name, height, mass, hair_color, age, homeworld, species) in characters {
        let result = character_service::create_character(
            state,
            CreateCharacterRequest {
                name: name.into(),
                height,
                mass,
                hair_color: hair_color.into(),
                age,
                homeworld: homeworld.into(),
                species: species.into(),
            },
        )
        .await;
        skip_existing(&format!("character {name}"), result)?;
    }
    Ok(())
}

async fn seed_vehicles(state: &AppState) -> anyhow::Result<()> {
    let vehicles = vec![
        ("Sand Crawler", "Digger Crawler", "Corellia Mining", 36, 30, 30, 50_000, "2 months"),
        ("T-16 skyhopper", "T-16 skyhopper", "Incom Corporation", 10, 1_200, 1, 50, "0"),
        ("X-34 landspeeder", "X-34 landspeeder", "SoroSuub Corporation", 3, 250, 1, 5, "unknown"),
    ];

    for (name, model, manufacturer, length, speed, passengers, cargo, consumables) in vehicles {
        let result = vehicle_service::create_vehicle(
            state,
            CreateVehicleRequest {
                name: name.into(),
                model: model.into(),
                manufacturer: manufacturer.into(),
                length,
                max_atmosphering_speed: speed,
                passengers,
                cargo_capacity: cargo,
                consumables: consumables.into(),
            },
        )
        .await;
        skip_existing(&format!("vehicle {name}"), result)?;
    }
    Ok(())
}
