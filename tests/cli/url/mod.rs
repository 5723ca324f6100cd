mod prints_release_url_contract;
