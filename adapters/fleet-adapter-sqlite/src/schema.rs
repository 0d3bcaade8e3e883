//! Database schema initialization

use sqlx::SqlitePool;

pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Manufacturers //
	///////////////////
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS manufacturers (
		manufacturer_id integer NOT NULL,
		name text NOT NULL,
		country text NOT NULL,
		created_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(manufacturer_id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_manufacturers_name ON manufacturers(name)")
		.execute(&mut *tx)
		.await?;

	// Cars //
	//////////
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS cars (
		car_id integer NOT NULL,
		model text NOT NULL,
		manufacturer_id integer NOT NULL
			REFERENCES manufacturers(manufacturer_id),
		created_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(car_id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_cars_manufacturer ON cars(manufacturer_id)")
		.execute(&mut *tx)
		.await?;

	// Drivers //
	/////////////
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS drivers (
		driver_id integer NOT NULL,
		username text NOT NULL,
		first_name text NOT NULL,
		last_name text NOT NULL,
		license_number char(8) NOT NULL,
		created_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(driver_id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_drivers_username ON drivers(username)")
		.execute(&mut *tx)
		.await?;
	// license_number is indexed but deliberately not UNIQUE
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_drivers_license ON drivers(license_number)")
		.execute(&mut *tx)
		.await?;

	// Car assignment //
	////////////////////
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS car_drivers (
		car_id integer NOT NULL
			REFERENCES cars(car_id) ON DELETE CASCADE,
		driver_id integer NOT NULL
			REFERENCES drivers(driver_id) ON DELETE CASCADE,
		created_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(car_id, driver_id)
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
