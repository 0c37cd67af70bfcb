pub mod nmap;
